//! Styled, clickable button component.
//!
//! This module provides:
//!
//! - [`ButtonProps`]: the caller's request (label, variant, size, classes,
//!   attributes, click handler)
//! - [`Button`]: the resolved component
//! - [`Variant`] and [`Size`]: the closed style vocabularies
//! - [`Attributes`] and [`AttrValue`]: native attributes forwarded verbatim
//!
//! Resolution is pure: the same props and theme always give the same class
//! string. The only side effect is the click handler, invoked once per
//! [`Button::click`].

mod attrs;
mod component;
mod variant;

pub use attrs::{is_valid_attr_name, AttrValue, Attributes};
pub use component::{Button, ButtonProps, ClickHandler, Label};
pub use variant::{Size, Variant};
