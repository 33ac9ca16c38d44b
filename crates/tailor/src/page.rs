//! Counter page: a count driven by a button.
//!
//! The page keeps one integer. Its button is rebuilt from the current count
//! every time it is requested, and each activation of that button adds one.

use std::cell::Cell;
use std::rc::Rc;

use crate::button::{Button, ButtonProps, Size};
use crate::render::Renderer;
use crate::theme::ButtonTheme;

/// A page holding a click counter.
#[derive(Debug, Clone, Default)]
pub struct CounterPage {
    count: Rc<Cell<u64>>,
}

impl CounterPage {
    /// Creates a page with the count at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count.get()
    }

    /// Label of the counter button for the current count.
    pub fn label(&self) -> String {
        format!("Count: {}", self.count())
    }

    /// Builds the counter button for the current count.
    pub fn button(&self) -> Button {
        self.button_with_theme(ButtonTheme::builtin())
    }

    pub(crate) fn button_with_theme(&self, theme: &ButtonTheme) -> Button {
        let count = Rc::clone(&self.count);
        let props = ButtonProps::new(self.label())
            .size(Size::Large)
            .class("w-full")
            .on_click(move || count.set(count.get() + 1));
        Button::with_theme(props, theme)
    }

    /// Activates the counter button once.
    pub fn click(&self) {
        self.button().click();
    }

    /// Renders the page with [`Renderer::shared`].
    pub fn to_html(&self) -> Result<String, minijinja::Error> {
        Renderer::shared()?.render_page(self)
    }
}
