//! Pre-compiled HTML renderer.

use minijinja::{AutoEscape, Environment, Error, ErrorKind};
use once_cell::sync::Lazy;
use serde::Serialize;

use super::filters::register_filters;
use crate::button::Button;
use crate::page::CounterPage;
use crate::theme::ButtonTheme;

const BUTTON_TEMPLATE_NAME: &str = "button.html";
const COUNTER_TEMPLATE_NAME: &str = "counter.html";

const BUTTON_TEMPLATE: &str = concat!(
    r#"<button class="{{ class_name }}""#,
    r#"{% for attr in attributes %} {{ attr.name }}{% if not attr.bare %}="{{ attr.value }}"{% endif %}{% endfor %}>"#,
    r#"{% if label_markup %}{{ label|safe }}{% else %}{{ label }}{% endif %}</button>"#,
);

const COUNTER_TEMPLATE: &str =
    r#"<main data-count="{{ count }}">{{ button|safe }}</main>"#;

static DEFAULT_RENDERER: Lazy<Result<Renderer, String>> =
    Lazy::new(|| Renderer::new().map_err(|e| e.to_string()));

/// A renderer with the built-in templates registered.
///
/// Templates are HTML auto-escaped. Besides the built-in `button.html` and
/// `counter.html`, callers may register their own templates; these get the
/// `cn` filter, the `cn()` function and `button_class()`, which resolves
/// classes from this renderer's theme.
///
/// # Example
///
/// ```rust
/// use tailor::{Button, ButtonProps, Renderer, Variant};
///
/// let renderer = Renderer::new().unwrap();
/// let button = Button::new(ButtonProps::new("Save").variant(Variant::Outline));
/// let html = renderer.render_button(&button).unwrap();
/// assert!(html.starts_with("<button class=\""));
/// assert!(html.ends_with(">Save</button>"));
/// ```
pub struct Renderer {
    env: Environment<'static>,
    theme: ButtonTheme,
}

impl Renderer {
    /// Creates a renderer using the built-in theme.
    pub fn new() -> Result<Self, Error> {
        Self::with_theme(ButtonTheme::new())
    }

    /// Creates a renderer whose template helpers resolve against `theme`.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme has blank entries.
    pub fn with_theme(theme: ButtonTheme) -> Result<Self, Error> {
        theme
            .validate()
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;

        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        register_filters(&mut env, theme.clone());
        env.add_template(BUTTON_TEMPLATE_NAME, BUTTON_TEMPLATE)?;
        env.add_template(COUNTER_TEMPLATE_NAME, COUNTER_TEMPLATE)?;
        Ok(Self { env, theme })
    }

    /// The process-wide renderer on the built-in theme, compiled on first use.
    ///
    /// Backs [`Button::to_html`] and [`CounterPage::to_html`].
    pub fn shared() -> Result<&'static Renderer, Error> {
        (*DEFAULT_RENDERER)
            .as_ref()
            .map_err(|msg| Error::new(ErrorKind::InvalidOperation, msg.clone()))
    }

    /// The theme used by template helpers and [`Renderer::render_page`].
    pub fn theme(&self) -> &ButtonTheme {
        &self.theme
    }

    /// Adds an HTML template under `name`, next to `button.html` and
    /// `counter.html`.
    ///
    /// Registering an existing name swaps in the new source, so the
    /// built-in templates can be restyled. Syntax errors surface here rather
    /// than at render time.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<(), Error> {
        let name = name.into();
        tracing::debug!(template = %name, "registering template");
        self.env.add_template_owned(name, source.into())
    }

    /// Renders the template `name` to an HTML string, escaping every value
    /// taken from `context` unless the template marks it `safe`.
    pub fn render<C: Serialize>(&self, name: &str, context: &C) -> Result<String, Error> {
        self.env.get_template(name)?.render(context)
    }

    /// Renders a button element.
    pub fn render_button(&self, button: &Button) -> Result<String, Error> {
        self.render(BUTTON_TEMPLATE_NAME, &button.render_context())
    }

    /// Renders the counter page, resolving its button against this renderer's theme.
    pub fn render_page(&self, page: &CounterPage) -> Result<String, Error> {
        let button = self.render_button(&page.button_with_theme(&self.theme))?;
        self.render(
            COUNTER_TEMPLATE_NAME,
            &minijinja::context! {
                count => page.count(),
                button => button,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{ButtonProps, Label, Size, Variant};
    use serde_json::json;

    #[test]
    fn test_render_button_exact_markup() {
        let theme = ButtonTheme::new()
            .base("inline-flex")
            .variant(Variant::Primary, "bg-blue-600")
            .size(Size::Medium, "px-4");
        let renderer = Renderer::with_theme(theme.clone()).unwrap();
        let button = Button::with_theme(
            ButtonProps::new("Go")
                .attr("disabled", true)
                .attr("data-testid", "go"),
            &theme,
        );
        assert_eq!(
            renderer.render_button(&button).unwrap(),
            r#"<button class="inline-flex bg-blue-600 px-4" disabled data-testid="go">Go</button>"#
        );
    }

    #[test]
    fn test_render_drops_malformed_attribute_names() {
        let renderer = Renderer::new().unwrap();
        let button = Button::new(
            ButtonProps::new("x")
                .attr("data-x onmouseover=alert(1)", "v")
                .attr("x\"><script>", true)
                .attr("data-testid", "ok"),
        );
        let html = renderer.render_button(&button).unwrap();
        assert!(!html.contains("onmouseover"));
        assert!(!html.contains("script"));
        assert!(html.ends_with(r#" data-testid="ok">x</button>"#));
    }

    #[test]
    fn test_shared_renderer_is_reused() {
        let first = Renderer::shared().unwrap();
        let second = Renderer::shared().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.theme(), ButtonTheme::builtin());
    }

    #[test]
    fn test_add_template_replaces_builtin() {
        let mut renderer = Renderer::new().unwrap();
        renderer
            .add_template("button.html", "<a class=\"{{ class_name }}\">{{ label }}</a>")
            .unwrap();
        let html = renderer.render_button(&Button::new(ButtonProps::new("Go"))).unwrap();
        assert!(html.starts_with("<a class=\""));
        assert!(html.ends_with(">Go</a>"));
    }

    #[test]
    fn test_render_escapes_text() {
        let renderer = Renderer::new().unwrap();
        let button = Button::new(
            ButtonProps::new("<b>\"hi\"</b>").attr("title", "a \"quoted\" <value>"),
        );
        let html = renderer.render_button(&button).unwrap();
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("title=\"a &quot;quoted&quot; &lt;value&gt;\""));
    }

    #[test]
    fn test_render_markup_label_verbatim() {
        let renderer = Renderer::new().unwrap();
        let button = Button::new(ButtonProps::new(Label::Markup("<span>Hi</span>".into())));
        let html = renderer.render_button(&button).unwrap();
        assert!(html.contains("><span>Hi</span></button>"));
    }

    #[test]
    fn test_render_omits_false_attributes() {
        let renderer = Renderer::new().unwrap();
        let button = Button::new(ButtonProps::new("x").disabled(false));
        let html = renderer.render_button(&button).unwrap();
        assert!(!html.contains("disabled=") && !html.contains(" disabled>"));
    }

    #[test]
    fn test_custom_template_helpers() {
        let mut renderer = Renderer::new().unwrap();
        renderer
            .add_template(
                "link.html",
                r#"<a class="{{ button_class(variant, "small", "underline") }}">{{ text }}</a>"#,
            )
            .unwrap();
        let html = renderer
            .render("link.html", &json!({"variant": "ghost", "text": "Docs"}))
            .unwrap();
        let expected = ButtonTheme::new().resolve(Variant::Ghost, Size::Small, "underline");
        assert_eq!(html, format!(r#"<a class="{}">Docs</a>"#, expected));
    }

    #[test]
    fn test_unknown_template_error() {
        let renderer = Renderer::new().unwrap();
        assert!(renderer.render("nonexistent", &json!({})).is_err());
    }

    #[test]
    fn test_invalid_template_syntax_error() {
        let mut renderer = Renderer::new().unwrap();
        assert!(renderer.add_template("bad", "{% if %}").is_err());
    }

    #[test]
    fn test_fails_with_invalid_theme() {
        let theme = ButtonTheme::new().variant(Variant::Ghost, "");
        assert!(Renderer::with_theme(theme).is_err());
    }
}
