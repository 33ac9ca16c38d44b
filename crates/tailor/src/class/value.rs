//! Class inputs.

/// Anything that can contribute classes to a class list.
///
/// Mirrors the usual `clsx` inputs: strings, optional strings, lists and
/// `(condition, class)` pairs. Falsy inputs contribute nothing.
///
/// # Example
///
/// ```rust
/// use tailor::class::{join_classes, ClassValue};
///
/// let active = true;
/// let disabled = false;
/// let classes = join_classes([
///     ClassValue::from("btn"),
///     ClassValue::from((active, "btn-active")),
///     ClassValue::from((disabled, "btn-disabled")),
///     ClassValue::from(None::<&str>),
/// ]);
/// assert_eq!(classes, "btn btn-active");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassValue {
    /// Contributes nothing.
    #[default]
    Empty,
    /// Whitespace-separated class tokens.
    Text(String),
    /// Nested inputs, flattened in order.
    List(Vec<ClassValue>),
}

impl ClassValue {
    /// Appends the tokens of this value to `out`, in order.
    pub fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ClassValue::Empty => {}
            ClassValue::Text(text) => out.extend(text.split_whitespace()),
            ClassValue::List(values) => {
                for value in values {
                    value.collect_tokens(out);
                }
            }
        }
    }

    /// Returns true when this value contributes no tokens.
    pub fn is_empty(&self) -> bool {
        match self {
            ClassValue::Empty => true,
            ClassValue::Text(text) => text.trim().is_empty(),
            ClassValue::List(values) => values.iter().all(ClassValue::is_empty),
        }
    }
}

impl From<&str> for ClassValue {
    fn from(text: &str) -> Self {
        ClassValue::Text(text.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(text: String) -> Self {
        ClassValue::Text(text)
    }
}

impl From<&String> for ClassValue {
    fn from(text: &String) -> Self {
        ClassValue::Text(text.clone())
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for ClassValue {
    fn from(values: &[&str]) -> Self {
        ClassValue::List(values.iter().map(|v| ClassValue::from(*v)).collect())
    }
}

impl<T: Into<ClassValue>> From<(bool, T)> for ClassValue {
    fn from((condition, value): (bool, T)) -> Self {
        if condition {
            value.into()
        } else {
            ClassValue::Empty
        }
    }
}

/// Flattens class inputs into a single space-separated string.
///
/// Tokens are kept as given: no conflict resolution happens here. Use
/// [`cn`](super::cn) to also merge conflicting utilities.
pub fn join_classes<I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue>,
{
    let values: Vec<ClassValue> = values.into_iter().map(Into::into).collect();
    let mut tokens = Vec::new();
    for value in &values {
        value.collect_tokens(&mut tokens);
    }
    tokens.join(" ")
}
