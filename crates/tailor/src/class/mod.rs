//! Class-list building and utility-class merging.
//!
//! This module provides:
//!
//! - [`ClassValue`]: class inputs (strings, options, lists, conditionals)
//! - [`join_classes`]: flattening without conflict resolution
//! - [`merge_classes`]: later-wins conflict resolution per visual property
//! - [`cn`] and the [`cn!`](crate::cn) macro: both steps at once
//! - [`explain_merge`]: a token-level account of a merge
//!
//! Class tokens are opaque to the rest of the crate. The merger only looks at
//! their shape (`hover:px-4`, `text-sm`, `bg-[#fff]`) to work out which
//! property each governs, so that `px-3 px-6` collapses to `px-6` while
//! `text-white text-sm` keeps both.

mod group;
mod merge;
mod parse;
mod value;

pub use merge::{explain_merge, merge_classes, DroppedClass, MergeReport};
pub use value::{join_classes, ClassValue};

/// Flattens class inputs and merges conflicting utilities.
///
/// # Example
///
/// ```rust
/// use tailor::class::cn;
///
/// let pressed = false;
/// let classes = cn([
///     Some("h-10 px-4 text-sm"),
///     pressed.then_some("ring-2"),
///     Some("px-6"),
/// ]);
/// assert_eq!(classes, "h-10 text-sm px-6");
/// ```
pub fn cn<I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue>,
{
    merge_classes(&join_classes(values))
}

/// Builds a merged class string from heterogeneous inputs.
///
/// Each argument may be anything convertible into a
/// [`ClassValue`](crate::class::ClassValue).
///
/// ```rust
/// use tailor::cn;
///
/// let extra: Option<String> = Some("w-full".into());
/// assert_eq!(cn!("px-2 py-1", (true, "px-4"), extra), "py-1 px-4 w-full");
/// ```
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::class::cn([$($crate::class::ClassValue::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_merges_layers() {
        let classes = cn([
            "inline-flex rounded-md",
            "bg-blue-600 text-white",
            "h-10 px-4 text-sm",
            "w-full px-6",
        ]);
        assert_eq!(
            classes,
            "inline-flex rounded-md bg-blue-600 text-white h-10 text-sm w-full px-6"
        );
    }

    #[test]
    fn test_cn_macro_mixed_inputs() {
        let none: Option<&str> = None;
        assert_eq!(crate::cn!("a", none, (false, "b"), String::from("c")), "a c");
        assert_eq!(crate::cn!(), "");
    }
}
