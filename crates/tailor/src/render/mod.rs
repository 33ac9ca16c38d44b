//! HTML rendering through minijinja templates.
//!
//! [`Renderer`] owns an auto-escaping environment with the built-in button
//! and counter-page templates, plus class helpers usable from any template
//! registered on it.

mod filters;
mod renderer;

pub use renderer::Renderer;
