//! # Tailor - styled buttons with utility-class merging
//!
//! Tailor resolves the classes of a reusable button component from layered
//! style tables, forwards native attributes and click handlers, and renders
//! the result as HTML.
//!
//! ## Concepts
//!
//! - [`ButtonProps`]: what the caller asks for (label, [`Variant`], [`Size`],
//!   extra classes, attributes, a click handler)
//! - [`ButtonTheme`]: the base, variant and size class tables
//! - [`Button`]: the resolved component, with [`Button::click`] forwarding
//!   activations to the handler
//! - [`class::cn`] / [`cn!`]: class-list merging where later utilities win
//!   over earlier ones governing the same property
//! - [`Renderer`]: minijinja-based HTML output
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tailor::{Button, ButtonProps, Size};
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&clicks);
//!
//! let mut button = Button::new(
//!     ButtonProps::new("Click me")
//!         .size(Size::Large)
//!         .class("w-full px-10")
//!         .attr("data-testid", "cta")
//!         .on_click(move || counter.set(counter.get() + 1)),
//! );
//!
//! assert!(button.has_class("px-10"));
//! assert!(!button.has_class("px-6"));
//!
//! button.click();
//! assert_eq!(clicks.get(), 1);
//!
//! let html = button.to_html().unwrap();
//! assert!(html.contains(r#"data-testid="cta""#));
//! ```
//!
//! ## Class merging
//!
//! Layers are concatenated in order and merged per visual property, not per
//! token text: `px-3` and `px-6` both set horizontal padding, so only the
//! later survives; `text-white` (colour) and `text-sm` (font size) govern
//! different properties, so both stay.
//!
//! ```rust
//! use tailor::cn;
//!
//! assert_eq!(cn!("h-8 px-3 text-sm", "text-white", "px-6"), "h-8 text-sm text-white px-6");
//! ```

pub mod button;
pub mod class;
pub mod page;
pub mod render;
pub mod theme;

pub use button::{AttrValue, Attributes, Button, ButtonProps, ClickHandler, Label, Size, Variant};
pub use class::{cn, explain_merge, merge_classes, ClassValue, MergeReport};
pub use page::CounterPage;
pub use render::Renderer;
pub use theme::{ButtonTheme, ThemeError};
