//! Property-group classification of utility classes.
//!
//! Every recognised utility maps to the identifier of the visual property it
//! governs (`px-4` → `px`, `text-sm` → `font-size`, `text-white` →
//! `text-color`). Two tokens conflict when they share a group under the same
//! modifiers. Some groups also shadow narrower ones: `p-4` sets every side,
//! so it overrides an earlier `px-2`, but not the other way round.
//!
//! Classes that are not recognised have no group and never conflict.

use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

/// Identifier of the property a utility governs.
pub(crate) type Group = Cow<'static, str>;

/// Utilities that are complete on their own, without a value.
static KEYWORDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for display in [
        "block",
        "inline-block",
        "inline",
        "flex",
        "inline-flex",
        "table",
        "inline-table",
        "table-caption",
        "table-cell",
        "table-column",
        "table-column-group",
        "table-footer-group",
        "table-header-group",
        "table-row-group",
        "table-row",
        "flow-root",
        "grid",
        "inline-grid",
        "contents",
        "list-item",
        "hidden",
    ] {
        map.insert(display, "display");
    }
    for position in ["static", "fixed", "absolute", "relative", "sticky"] {
        map.insert(position, "position");
    }
    for visibility in ["visible", "invisible", "collapse"] {
        map.insert(visibility, "visibility");
    }
    for decoration in ["underline", "overline", "line-through", "no-underline"] {
        map.insert(decoration, "text-decoration");
    }
    for transform in ["uppercase", "lowercase", "capitalize", "normal-case"] {
        map.insert(transform, "text-transform");
    }
    map.insert("italic", "font-style");
    map.insert("not-italic", "font-style");
    map.insert("antialiased", "font-smoothing");
    map.insert("subpixel-antialiased", "font-smoothing");
    map.insert("isolate", "isolation");
    map.insert("isolation-auto", "isolation");
    map.insert("sr-only", "sr");
    map.insert("not-sr-only", "sr");
    map.insert("truncate", "text-overflow");
    map.insert("container", "container");
    map.insert("grow", "grow");
    map.insert("shrink", "shrink");
    map.insert("border", "border-w");
    map.insert("ring", "ring-w");
    map.insert("shadow", "shadow");
    map.insert("rounded", "rounded");
    map.insert("transition", "transition");
    map.insert("outline", "outline-style");
    map
});

/// Prefixes whose value never changes the group.
///
/// Matched as `prefix-value`; more specific prefixes come first.
const FIXED_PREFIXES: &[(&str, &str)] = &[
    ("min-w", "min-w"),
    ("min-h", "min-h"),
    ("max-w", "max-w"),
    ("max-h", "max-h"),
    ("px", "px"),
    ("py", "py"),
    ("ps", "ps"),
    ("pe", "pe"),
    ("pt", "pt"),
    ("pr", "pr"),
    ("pb", "pb"),
    ("pl", "pl"),
    ("p", "p"),
    ("mx", "mx"),
    ("my", "my"),
    ("ms", "ms"),
    ("me", "me"),
    ("mt", "mt"),
    ("mr", "mr"),
    ("mb", "mb"),
    ("ml", "ml"),
    ("m", "m"),
    ("space-x", "space-x"),
    ("space-y", "space-y"),
    ("size", "size"),
    ("w", "w"),
    ("h", "h"),
    ("gap-x", "gap-x"),
    ("gap-y", "gap-y"),
    ("gap", "gap"),
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("inset", "inset"),
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("start", "start"),
    ("end", "end"),
    ("z", "z"),
    ("opacity", "opacity"),
    ("leading", "leading"),
    ("tracking", "tracking"),
    ("indent", "indent"),
    ("duration", "duration"),
    ("ease", "ease"),
    ("delay", "delay"),
    ("animate", "animate"),
    ("cursor", "cursor"),
    ("pointer-events", "pointer-events"),
    ("select", "select"),
    ("resize", "resize"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    ("overflow", "overflow"),
    ("whitespace", "whitespace"),
    ("break", "break"),
    ("items", "align-items"),
    ("justify-items", "justify-items"),
    ("justify-self", "justify-self"),
    ("justify", "justify-content"),
    ("self", "align-self"),
    ("place-content", "place-content"),
    ("place-items", "place-items"),
    ("place-self", "place-self"),
    ("content", "align-content"),
    ("grow", "grow"),
    ("shrink", "shrink"),
    ("basis", "basis"),
    ("order", "order"),
    ("grid-cols", "grid-cols"),
    ("grid-rows", "grid-rows"),
    ("col-span", "col-span"),
    ("col-start", "col-start"),
    ("col-end", "col-end"),
    ("row-span", "row-span"),
    ("row-start", "row-start"),
    ("row-end", "row-end"),
    ("scale-x", "scale-x"),
    ("scale-y", "scale-y"),
    ("scale", "scale"),
    ("rotate", "rotate"),
    ("translate-x", "translate-x"),
    ("translate-y", "translate-y"),
    ("skew-x", "skew-x"),
    ("skew-y", "skew-y"),
    ("origin", "transform-origin"),
    ("aspect", "aspect"),
    ("object", "object"),
    ("fill", "fill"),
    ("stroke", "stroke"),
    ("from", "gradient-from"),
    ("via", "gradient-via"),
    ("to", "gradient-to"),
    ("list", "list-style"),
    ("line-clamp", "line-clamp"),
    ("columns", "columns"),
    ("blur", "blur"),
    ("brightness", "brightness"),
    ("backdrop-blur", "backdrop-blur"),
    ("accent", "accent"),
    ("caret", "caret"),
    ("will-change", "will-change"),
    ("divide-x", "divide-x"),
    ("divide-y", "divide-y"),
    ("underline-offset", "underline-offset"),
];

/// Groups that a wider group overrides when it appears later.
const OVERRIDES: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("size", &["w", "h"]),
    ("gap", &["gap-x", "gap-y"]),
    (
        "inset",
        &[
            "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left",
        ],
    ),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("overflow", &["overflow-x", "overflow-y"]),
    ("scale", &["scale-x", "scale-y"]),
    ("font-size", &["leading"]),
    (
        "rounded",
        &[
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-ss",
            "rounded-se",
            "rounded-ee",
            "rounded-es",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
    ),
    ("rounded-s", &["rounded-ss", "rounded-es"]),
    ("rounded-e", &["rounded-se", "rounded-ee"]),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    (
        "border-w",
        &[
            "border-w-x",
            "border-w-y",
            "border-w-s",
            "border-w-e",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
    ),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    (
        "border-color",
        &[
            "border-color-x",
            "border-color-y",
            "border-color-s",
            "border-color-e",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
    ),
    ("border-color-x", &["border-color-r", "border-color-l"]),
    ("border-color-y", &["border-color-t", "border-color-b"]),
];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const OUTLINE_STYLES: &[&str] = &["none", "solid", "dashed", "dotted", "double"];
const BG_POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];
const BG_REPEATS: &[&str] = &[
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "repeat-round",
    "repeat-space",
];

/// (side, width group, color group)
const BORDER_SIDES: &[(&str, &str, &str)] = &[
    ("x", "border-w-x", "border-color-x"),
    ("y", "border-w-y", "border-color-y"),
    ("s", "border-w-s", "border-color-s"),
    ("e", "border-w-e", "border-color-e"),
    ("t", "border-w-t", "border-color-t"),
    ("r", "border-w-r", "border-color-r"),
    ("b", "border-w-b", "border-color-b"),
    ("l", "border-w-l", "border-color-l"),
];

const ROUNDED_SIDES: &[(&str, &str)] = &[
    ("ss", "rounded-ss"),
    ("se", "rounded-se"),
    ("ee", "rounded-ee"),
    ("es", "rounded-es"),
    ("tl", "rounded-tl"),
    ("tr", "rounded-tr"),
    ("br", "rounded-br"),
    ("bl", "rounded-bl"),
    ("s", "rounded-s"),
    ("e", "rounded-e"),
    ("t", "rounded-t"),
    ("r", "rounded-r"),
    ("b", "rounded-b"),
    ("l", "rounded-l"),
];

/// Returns the property group of a utility, or `None` for unknown classes.
///
/// `base` must already be stripped of modifiers, important markers and a
/// negative sign (see [`ParsedClass`](super::parse::ParsedClass)).
pub(crate) fn classify(base: &str) -> Option<Group> {
    if let Some(property) = arbitrary_property(base) {
        return Some(Cow::Owned(format!("[{}]", property)));
    }
    if let Some(group) = KEYWORDS.get(base) {
        return Some(Cow::Borrowed(*group));
    }
    classify_prefixed(base).map(Cow::Borrowed)
}

/// Groups overridden by `group` when it appears later in a class list.
pub(crate) fn overridden_by(group: &str) -> &'static [&'static str] {
    OVERRIDES
        .iter()
        .find(|(wide, _)| *wide == group)
        .map(|(_, narrow)| *narrow)
        .unwrap_or(&[])
}

fn classify_prefixed(base: &str) -> Option<&'static str> {
    let (prefix, value) = split_value(base)?;
    match prefix {
        "text" => return Some(text_group(value)),
        "bg" => return Some(bg_group(value)),
        "font" => return Some(font_group(value)),
        "border" => return Some(border_group(value)),
        "ring" => return Some(ring_group(value)),
        "shadow" => return Some(shadow_group(value)),
        "outline" => return Some(outline_group(value)),
        "rounded" => return Some(rounded_group(value)),
        "flex" => return Some(flex_group(value)),
        "transition" => return Some("transition"),
        _ => {}
    }

    FIXED_PREFIXES.iter().find_map(|(fixed, group)| {
        let rest = base.strip_prefix(fixed)?.strip_prefix('-')?;
        (!rest.is_empty()).then_some(*group)
    })
}

/// Splits `text-gray-900` into (`text`, `gray-900`) at the first dash that is
/// not part of an arbitrary value.
fn split_value(base: &str) -> Option<(&str, &str)> {
    let (prefix, value) = base.split_once('-')?;
    if prefix.is_empty() || value.is_empty() || prefix.contains('[') {
        return None;
    }
    Some((prefix, value))
}

fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    (!property.is_empty() && !value.is_empty()).then_some(property)
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

fn is_arbitrary_length(value: &str) -> bool {
    if !is_arbitrary(value) {
        return false;
    }
    let inner = &value[1..value.len() - 1];
    inner.starts_with("length:")
        || inner.starts_with("calc(")
        || inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

fn is_width(value: &str) -> bool {
    is_number(value) || is_arbitrary_length(value) || value == "px"
}

fn text_group(value: &str) -> &'static str {
    if TEXT_SIZES.contains(&value) || is_arbitrary_length(value) {
        "font-size"
    } else if TEXT_ALIGN.contains(&value) {
        "text-align"
    } else if value == "ellipsis" || value == "clip" {
        "text-overflow"
    } else if ["wrap", "nowrap", "balance", "pretty"].contains(&value) {
        "text-wrap"
    } else if value.starts_with("opacity-") {
        "text-opacity"
    } else {
        "text-color"
    }
}

fn bg_group(value: &str) -> &'static str {
    if ["fixed", "local", "scroll"].contains(&value) {
        "bg-attachment"
    } else if ["auto", "cover", "contain"].contains(&value) {
        "bg-size"
    } else if BG_POSITIONS.contains(&value) {
        "bg-position"
    } else if BG_REPEATS.contains(&value) {
        "bg-repeat"
    } else if value == "none" || value.starts_with("gradient-to-") {
        "bg-image"
    } else if value.starts_with("clip-") {
        "bg-clip"
    } else if value.starts_with("origin-") {
        "bg-origin"
    } else if value.starts_with("opacity-") {
        "bg-opacity"
    } else {
        "bg-color"
    }
}

fn font_group(value: &str) -> &'static str {
    if FONT_WEIGHTS.contains(&value) || is_number(value) {
        "font-weight"
    } else {
        "font-family"
    }
}

fn border_group(value: &str) -> &'static str {
    for (side, width, color) in BORDER_SIDES {
        if value == *side {
            return *width;
        }
        if let Some(rest) = value.strip_prefix(side).and_then(|r| r.strip_prefix('-')) {
            return if is_width(rest) { *width } else { *color };
        }
    }

    if is_width(value) {
        "border-w"
    } else if BORDER_STYLES.contains(&value) {
        "border-style"
    } else if value == "collapse" || value == "separate" {
        "border-collapse"
    } else if value.starts_with("spacing") {
        "border-spacing"
    } else if value.starts_with("opacity-") {
        "border-opacity"
    } else {
        "border-color"
    }
}

fn ring_group(value: &str) -> &'static str {
    if value == "inset" {
        "ring-inset"
    } else if let Some(offset) = value.strip_prefix("offset-") {
        if is_width(offset) {
            "ring-offset-w"
        } else {
            "ring-offset-color"
        }
    } else if is_width(value) {
        "ring-w"
    } else if value.starts_with("opacity-") {
        "ring-opacity"
    } else {
        "ring-color"
    }
}

fn shadow_group(value: &str) -> &'static str {
    if SHADOW_SIZES.contains(&value) || is_arbitrary_length(value) {
        "shadow"
    } else {
        "shadow-color"
    }
}

fn outline_group(value: &str) -> &'static str {
    if OUTLINE_STYLES.contains(&value) {
        "outline-style"
    } else if value.starts_with("offset-") {
        "outline-offset"
    } else if is_width(value) {
        "outline-w"
    } else {
        "outline-color"
    }
}

fn rounded_group(value: &str) -> &'static str {
    for (side, group) in ROUNDED_SIDES {
        if value == *side || value.strip_prefix(side).is_some_and(|r| r.starts_with('-')) {
            return *group;
        }
    }
    "rounded"
}

fn flex_group(value: &str) -> &'static str {
    match value {
        "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
        "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
        _ => "flex",
    }
}
