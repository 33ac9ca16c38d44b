//! The button component.

use serde::Serialize;

use super::attrs::{is_valid_attr_name, AttrValue, Attributes};
use super::variant::{Size, Variant};
use crate::class::{join_classes, ClassValue};
use crate::render::Renderer;
use crate::theme::ButtonTheme;

/// Renderable content of a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Plain text, escaped on render.
    Text(String),
    /// Trusted markup, inserted verbatim.
    Markup(String),
}

impl Label {
    pub fn as_str(&self) -> &str {
        match self {
            Label::Text(text) | Label::Markup(text) => text,
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Text(text)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handler invoked once per activation.
pub type ClickHandler = Box<dyn FnMut()>;

/// Everything a caller supplies to render a button.
///
/// Built fresh for every render and consumed by [`Button::new`].
///
/// # Example
///
/// ```rust
/// use tailor::{ButtonProps, Size, Variant};
///
/// let props = ButtonProps::new("Delete")
///     .variant(Variant::Outline)
///     .size(Size::Small)
///     .class("text-red-600")
///     .attr("data-testid", "delete")
///     .on_click(|| println!("deleted"));
/// ```
pub struct ButtonProps {
    label: Label,
    variant: Variant,
    size: Size,
    class: ClassValue,
    attributes: Attributes,
    on_click: Option<ClickHandler>,
}

impl ButtonProps {
    /// Creates props for a primary, medium button.
    pub fn new(label: impl Into<Label>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::default(),
            size: Size::default(),
            class: ClassValue::Empty,
            attributes: Attributes::new(),
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Caller classes, applied after the theme layers.
    pub fn class(mut self, class: impl Into<ClassValue>) -> Self {
        self.class = class.into();
        self
    }

    /// Forwards a native attribute to the rendered element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Replaces the whole attribute bag.
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Shorthand for the `disabled` attribute.
    pub fn disabled(self, disabled: bool) -> Self {
        self.attr("disabled", disabled)
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl std::fmt::Debug for ButtonProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonProps")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("class", &self.class)
            .field("attributes", &self.attributes)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// A resolved button: final classes, forwarded attributes and the
/// activation handler.
pub struct Button {
    label: Label,
    variant: Variant,
    size: Size,
    class_name: String,
    attributes: Attributes,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Resolves `props` against the built-in theme.
    pub fn new(props: ButtonProps) -> Self {
        Self::with_theme(props, ButtonTheme::builtin())
    }

    /// Resolves `props` against `theme`.
    ///
    /// A `class` entry in the attribute bag is treated as part of the caller
    /// override layer, after [`ButtonProps::class`].
    pub fn with_theme(props: ButtonProps, theme: &ButtonTheme) -> Self {
        let class_attr = props
            .attributes
            .get("class")
            .and_then(AttrValue::as_text)
            .map(str::to_string);
        let overrides = join_classes([props.class, ClassValue::from(class_attr)]);
        let class_name = theme.resolve(props.variant, props.size, overrides);

        Self {
            label: props.label,
            variant: props.variant,
            size: props.size,
            class_name,
            attributes: props.attributes,
            on_click: props.on_click,
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The resolved, merged class string.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_name.split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// The forwarded attributes, exactly as supplied.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn is_disabled(&self) -> bool {
        self.attributes.is_set("disabled")
    }

    /// Delivers one activation event.
    ///
    /// Returns `true` when the handler ran. Disabled buttons deliver nothing,
    /// matching a native disabled button.
    pub fn click(&mut self) -> bool {
        if self.is_disabled() {
            tracing::trace!(label = %self.label, "click ignored on disabled button");
            return false;
        }
        match self.on_click.as_mut() {
            Some(handler) => {
                tracing::trace!(label = %self.label, "button activated");
                handler();
                true
            }
            None => false,
        }
    }

    /// Renders the button as HTML with [`Renderer::shared`].
    pub fn to_html(&self) -> Result<String, minijinja::Error> {
        Renderer::shared()?.render_button(self)
    }

    pub(crate) fn render_context(&self) -> ButtonContext<'_> {
        let attributes = self
            .attributes
            .iter()
            .filter(|(name, value)| *name != "class" && value.is_truthy())
            .filter(|(name, _)| {
                let valid = is_valid_attr_name(name);
                if !valid {
                    tracing::debug!(name = %name, "skipping malformed attribute name");
                }
                valid
            })
            .map(|(name, value)| AttrContext {
                name,
                value: value.as_text(),
                bare: value.as_text().is_none(),
            })
            .collect();

        ButtonContext {
            class_name: &self.class_name,
            attributes,
            label: self.label.as_str(),
            label_markup: matches!(self.label, Label::Markup(_)),
        }
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("class_name", &self.class_name)
            .field("attributes", &self.attributes)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Template data for `button.html`.
#[derive(Debug, Serialize)]
pub(crate) struct ButtonContext<'a> {
    pub class_name: &'a str,
    pub attributes: Vec<AttrContext<'a>>,
    pub label: &'a str,
    pub label_markup: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AttrContext<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
    pub bare: bool,
}
