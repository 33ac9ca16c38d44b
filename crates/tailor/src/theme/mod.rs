//! Style tables for buttons.
//!
//! This module provides:
//!
//! - [`ButtonTheme`]: the base, variant and size class tables
//! - [`ThemeError`]: errors from loading or validating a theme
//!
//! A theme is layered the same way every button resolves its classes: base
//! classes first, then the variant entry, then the size entry. Caller
//! overrides are applied on top by [`ButtonTheme::resolve`].

mod error;
#[allow(clippy::module_inception)]
mod theme;

pub use error::ThemeError;
pub use theme::ButtonTheme;
