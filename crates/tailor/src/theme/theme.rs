//! Button theme tables.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::error::ThemeError;
use crate::button::{Size, Variant};
use crate::class::{cn, ClassValue};

const BASE: &str = "inline-flex items-center justify-center font-medium rounded-md \
    transition-colors focus-visible:outline-none focus-visible:ring-2 \
    focus-visible:ring-blue-500 disabled:pointer-events-none disabled:opacity-50";

static BUILTIN: Lazy<ButtonTheme> = Lazy::new(|| ButtonTheme {
    base: BASE.to_string(),
    variants: [
        "bg-blue-600 hover:bg-blue-700 text-white shadow-sm".to_string(),
        "bg-gray-600 hover:bg-gray-700 text-white shadow-sm".to_string(),
        "border border-gray-300 bg-white hover:bg-gray-50 text-gray-900".to_string(),
        "hover:bg-gray-100 text-gray-900".to_string(),
    ],
    sizes: [
        "h-8 px-3 text-sm".to_string(),
        "h-10 px-4 text-sm".to_string(),
        "h-12 px-6 text-base".to_string(),
    ],
});

/// Class tables used to resolve a button's classes.
///
/// Every [`Variant`] and every [`Size`] always has an entry, so any
/// combination resolves. [`ButtonTheme::new`] starts from the built-in tables;
/// the builder methods replace single entries.
///
/// # Example
///
/// ```rust
/// use tailor::{ButtonTheme, Size, Variant};
///
/// let theme = ButtonTheme::new()
///     .variant(Variant::Primary, "bg-emerald-600 hover:bg-emerald-700 text-white")
///     .size(Size::Large, "h-14 px-8 text-lg");
///
/// let classes = theme.resolve(Variant::Primary, Size::Large, "px-10");
/// assert!(classes.contains("bg-emerald-600"));
/// assert!(classes.ends_with("px-10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonTheme {
    base: String,
    variants: [String; Variant::ALL.len()],
    sizes: [String; Size::ALL.len()],
}

/// On-disk theme document. Missing entries keep the built-in values.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    variants: HashMap<Variant, String>,
    #[serde(default)]
    sizes: HashMap<Size, String>,
}

impl ButtonTheme {
    /// Creates a theme holding the built-in tables.
    pub fn new() -> Self {
        Self::builtin().clone()
    }

    /// The built-in tables, shared by every button that is not given a theme.
    pub fn builtin() -> &'static ButtonTheme {
        &BUILTIN
    }

    /// Replaces the base classes, returning the updated theme for chaining.
    pub fn base(mut self, classes: impl Into<String>) -> Self {
        self.base = classes.into();
        self
    }

    /// Replaces the entry for `variant`.
    pub fn variant(mut self, variant: Variant, classes: impl Into<String>) -> Self {
        self.variants[variant.index()] = classes.into();
        self
    }

    /// Replaces the entry for `size`.
    pub fn size(mut self, size: Size, classes: impl Into<String>) -> Self {
        self.sizes[size.index()] = classes.into();
        self
    }

    pub fn base_classes(&self) -> &str {
        &self.base
    }

    pub fn variant_classes(&self, variant: Variant) -> &str {
        &self.variants[variant.index()]
    }

    pub fn size_classes(&self, size: Size) -> &str {
        &self.sizes[size.index()]
    }

    /// Resolves the final class string for a button.
    ///
    /// Layers are applied in order (base, variant, size, overrides) and
    /// merged so later layers win on conflicting properties.
    pub fn resolve(&self, variant: Variant, size: Size, overrides: impl Into<ClassValue>) -> String {
        cn([
            ClassValue::from(self.base_classes()),
            ClassValue::from(self.variant_classes(variant)),
            ClassValue::from(self.size_classes(size)),
            overrides.into(),
        ])
    }

    /// Checks that every table entry holds at least one class.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.base.split_whitespace().next().is_none() {
            return Err(ThemeError::EmptyEntry {
                entry: "base".to_string(),
            });
        }
        for variant in Variant::ALL {
            if self.variant_classes(variant).split_whitespace().next().is_none() {
                return Err(ThemeError::EmptyEntry {
                    entry: format!("variants.{}", variant),
                });
            }
        }
        for size in Size::ALL {
            if self.size_classes(size).split_whitespace().next().is_none() {
                return Err(ThemeError::EmptyEntry {
                    entry: format!("sizes.{}", size),
                });
            }
        }
        Ok(())
    }

    /// Parses a YAML theme document on top of the built-in tables.
    ///
    /// ```yaml
    /// base: "inline-flex items-center rounded-full"
    /// variants:
    ///   primary: "bg-indigo-600 text-white"
    /// sizes:
    ///   small: "h-7 px-2 text-xs"
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] for malformed documents, unknown keys or
    /// names outside the variant/size vocabulary, and
    /// [`ThemeError::EmptyEntry`] when an entry is blank.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = serde_yaml::from_str(source)?;

        let mut theme = Self::new();
        if let Some(base) = file.base {
            theme.base = base;
        }
        let variant_count = file.variants.len();
        for (variant, classes) in file.variants {
            theme.variants[variant.index()] = classes;
        }
        let size_count = file.sizes.len();
        for (size, classes) in file.sizes {
            theme.sizes[size.index()] = classes;
        }

        theme.validate()?;
        tracing::debug!(
            variants = variant_count,
            sizes = size_count,
            "loaded button theme"
        );
        Ok(theme)
    }

    /// Reads and parses a YAML theme file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "reading button theme");
        Self::from_yaml(&source)
    }
}

impl Default for ButtonTheme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables() {
        let theme = ButtonTheme::new();
        assert!(theme.base_classes().starts_with("inline-flex"));
        assert_eq!(
            theme.variant_classes(Variant::Secondary),
            "bg-gray-600 hover:bg-gray-700 text-white shadow-sm"
        );
        assert_eq!(theme.size_classes(Size::Small), "h-8 px-3 text-sm");
        assert_eq!(theme.size_classes(Size::Large), "h-12 px-6 text-base");
    }

    #[test]
    fn test_builtin_validates() {
        assert!(ButtonTheme::builtin().validate().is_ok());
    }

    #[test]
    fn test_every_combination_resolves() {
        let theme = ButtonTheme::new();
        for variant in Variant::ALL {
            for size in Size::ALL {
                let classes = theme.resolve(variant, size, None::<&str>);
                assert!(!classes.is_empty());
                for token in theme.size_classes(size).split_whitespace() {
                    assert!(classes.split_whitespace().any(|c| c == token));
                }
            }
        }
    }

    #[test]
    fn test_resolve_default_is_primary_medium() {
        let theme = ButtonTheme::new();
        assert_eq!(
            theme.resolve(Variant::Primary, Size::Medium, ""),
            format!(
                "{} {} {}",
                BASE.split_whitespace().collect::<Vec<_>>().join(" "),
                "bg-blue-600 hover:bg-blue-700 text-white shadow-sm",
                "h-10 px-4 text-sm"
            )
        );
    }

    #[test]
    fn test_resolve_override_wins() {
        let theme = ButtonTheme::new();
        let classes = theme.resolve(Variant::Outline, Size::Small, "px-8 bg-red-50");
        let tokens: Vec<&str> = classes.split_whitespace().collect();
        assert!(tokens.contains(&"px-8"));
        assert!(!tokens.contains(&"px-3"));
        assert!(tokens.contains(&"bg-red-50"));
        assert!(!tokens.contains(&"bg-white"));
        assert!(tokens.contains(&"hover:bg-gray-50"));
    }

    #[test]
    fn test_builder_replaces_entries() {
        let theme = ButtonTheme::new()
            .base("inline-flex")
            .variant(Variant::Ghost, "text-gray-700")
            .size(Size::Medium, "h-9 px-3");
        assert_eq!(theme.base_classes(), "inline-flex");
        assert_eq!(theme.variant_classes(Variant::Ghost), "text-gray-700");
        assert_eq!(theme.size_classes(Size::Medium), "h-9 px-3");
        assert_eq!(
            theme.variant_classes(Variant::Primary),
            ButtonTheme::builtin().variant_classes(Variant::Primary)
        );
    }

    #[test]
    fn test_validate_rejects_blank_entries() {
        let err = ButtonTheme::new()
            .size(Size::Large, "   ")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ThemeError::EmptyEntry { ref entry } if entry == "sizes.large"));

        let err = ButtonTheme::new().base("").validate().unwrap_err();
        assert!(matches!(err, ThemeError::EmptyEntry { ref entry } if entry == "base"));
    }

    #[test]
    fn test_from_yaml_overrides_entries() {
        let theme = ButtonTheme::from_yaml(
            r#"
variants:
  secondary: "bg-slate-600 text-white"
sizes:
  small: "h-7 px-2 text-xs"
"#,
        )
        .unwrap();
        assert_eq!(
            theme.variant_classes(Variant::Secondary),
            "bg-slate-600 text-white"
        );
        assert_eq!(theme.size_classes(Size::Small), "h-7 px-2 text-xs");
        assert_eq!(theme.base_classes(), ButtonTheme::builtin().base_classes());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_names() {
        let err = ButtonTheme::from_yaml("sizes:\n  sm: \"h-8\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));

        let err = ButtonTheme::from_yaml("colors: {}\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_from_yaml_rejects_blank_entry() {
        let err = ButtonTheme::from_yaml("variants:\n  ghost: \"\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::EmptyEntry { .. }));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ButtonTheme::from_path("/nonexistent/theme.yaml").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
