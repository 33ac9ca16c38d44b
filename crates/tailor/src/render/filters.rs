//! MiniJinja filter and function registration.

use minijinja::value::Rest;
use minijinja::Environment;

use crate::button::{Size, Variant};
use crate::class::{cn, merge_classes};
use crate::theme::ButtonTheme;

/// Registers the class helpers on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: ButtonTheme) {
    // {{ "px-2 px-4" | cn }} outputs px-4
    env.add_filter("cn", |value: String| -> String { merge_classes(&value) });

    // {{ cn(base, extra, "w-full") }}: any number of class strings
    env.add_function("cn", |Rest(values): Rest<String>| -> String { cn(values) });

    // {{ button_class("outline", "small", "w-full") }}: classes from the theme tables
    env.add_function(
        "button_class",
        move |variant: String, size: String, extra: Option<String>| -> String {
            theme.resolve(
                Variant::parse_or_default(&variant),
                Size::parse_or_default(&size),
                extra,
            )
        },
    );
}
