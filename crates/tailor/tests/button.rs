//! Integration tests for the button component.

use std::cell::Cell;
use std::rc::Rc;

use tailor::{AttrValue, Attributes, Button, ButtonProps, ButtonTheme, Label, Size, Variant};

fn tokens(button: &Button) -> Vec<&str> {
    button.classes().collect()
}

#[test]
fn test_renders_with_default_props() {
    let button = Button::new(ButtonProps::new("Click me"));
    let html = button.to_html().unwrap();

    assert!(html.starts_with("<button "));
    assert!(html.ends_with(">Click me</button>"));
    assert!(button.has_class("bg-blue-600"));
    assert!(button.has_class("px-4"));
}

#[test]
fn test_default_equals_primary_medium() {
    let implicit = Button::new(ButtonProps::new("x"));
    let explicit = Button::new(
        ButtonProps::new("x")
            .variant(Variant::Primary)
            .size(Size::Medium),
    );
    assert_eq!(implicit.class_name(), explicit.class_name());
}

#[test]
fn test_variant_tokens_are_exclusive() {
    let theme = ButtonTheme::builtin();
    for variant in Variant::ALL {
        let button = Button::new(ButtonProps::new("x").variant(variant));
        let classes = tokens(&button);

        for token in theme.base_classes().split_whitespace() {
            assert!(classes.contains(&token), "{variant}: missing base {token}");
        }
        for token in theme.variant_classes(variant).split_whitespace() {
            assert!(classes.contains(&token), "{variant}: missing {token}");
        }
        for other in Variant::ALL.into_iter().filter(|v| *v != variant) {
            for token in theme.variant_classes(other).split_whitespace() {
                let own = theme.variant_classes(variant).split_whitespace().any(|t| t == token);
                if !own {
                    assert!(!classes.contains(&token), "{variant}: leaked {other} token {token}");
                }
            }
        }
    }
}

#[test]
fn test_renders_with_custom_variant() {
    let button = Button::new(ButtonProps::new("Secondary Button").variant(Variant::Secondary));
    assert!(button.has_class("bg-gray-600"));
    assert!(!button.has_class("bg-blue-600"));
}

#[test]
fn test_renders_different_sizes() {
    let small = Button::new(ButtonProps::new("Small").size(Size::Small));
    assert!(small.has_class("px-3") && small.has_class("text-sm"));

    let medium = Button::new(ButtonProps::new("Medium").size(Size::Medium));
    assert!(medium.has_class("px-4") && medium.has_class("text-sm"));

    let large = Button::new(ButtonProps::new("Large").size(Size::Large));
    assert!(large.has_class("px-6") && large.has_class("text-base"));
    assert!(!large.has_class("text-sm"));
}

#[test]
fn test_size_tokens_present_for_every_variant() {
    let theme = ButtonTheme::builtin();
    for variant in Variant::ALL {
        for size in Size::ALL {
            let button = Button::new(ButtonProps::new("x").variant(variant).size(size));
            for token in theme.size_classes(size).split_whitespace() {
                assert!(button.has_class(token), "{variant}/{size}: missing {token}");
            }
        }
    }
}

#[test]
fn test_applies_custom_class() {
    let button = Button::new(ButtonProps::new("Custom Button").class("custom-class"));
    assert!(button.has_class("custom-class"));
}

#[test]
fn test_conflicting_override_wins() {
    let button = Button::new(
        ButtonProps::new("x")
            .size(Size::Small)
            .class("px-8 text-lg bg-red-600"),
    );
    assert!(button.has_class("px-8"));
    assert!(!button.has_class("px-3"));
    assert!(button.has_class("text-lg"));
    assert!(!button.has_class("text-sm"));
    assert!(button.has_class("bg-red-600"));
    assert!(!button.has_class("bg-blue-600"));
    // hover colour is scoped by its modifier and survives
    assert!(button.has_class("hover:bg-blue-700"));
    // colour and size are different properties
    assert!(button.has_class("text-white"));
}

#[test]
fn test_non_conflicting_override_is_added() {
    let plain = Button::new(ButtonProps::new("x"));
    let wide = Button::new(ButtonProps::new("x").class("w-full"));
    assert_eq!(wide.class_name(), format!("{} w-full", plain.class_name()));
}

#[test]
fn test_handles_click_events() {
    let calls = Rc::new(Cell::new(0u32));
    let recorder = Rc::clone(&calls);
    let mut button = Button::new(
        ButtonProps::new("Clickable Button").on_click(move || recorder.set(recorder.get() + 1)),
    );

    assert_eq!(calls.get(), 0);
    button.click();
    assert_eq!(calls.get(), 1);

    for _ in 0..9 {
        button.click();
    }
    assert_eq!(calls.get(), 10);
}

#[test]
fn test_passes_through_additional_attributes() {
    let button = Button::new(
        ButtonProps::new("Disabled Button")
            .disabled(true)
            .attr("data-testid", "test-button"),
    );

    assert!(button.is_disabled());
    assert_eq!(
        button.attributes().get("data-testid"),
        Some(&AttrValue::Text("test-button".into()))
    );

    let html = button.to_html().unwrap();
    assert!(html.contains(" disabled"));
    assert!(html.contains(r#"data-testid="test-button""#));
}

#[test]
fn test_attribute_bag_is_forwarded_unchanged() {
    let attrs = Attributes::new()
        .with("aria-label", "Close dialog")
        .with("tabindex", 0i64)
        .with("form", "settings");
    let button = Button::new(ButtonProps::new("x").attributes(attrs.clone()));
    assert_eq!(button.attributes(), &attrs);
}

#[test]
fn test_markup_label() {
    let button = Button::new(ButtonProps::new(Label::Markup("<svg></svg> Save".into())));
    let html = button.to_html().unwrap();
    assert!(html.contains("><svg></svg> Save</button>"));
}

#[test]
fn test_rerender_with_new_props() {
    let first = Button::new(ButtonProps::new("Primary").variant(Variant::Primary));
    assert!(first.has_class("bg-blue-600"));

    let second = Button::new(ButtonProps::new("Secondary").variant(Variant::Secondary));
    assert!(second.has_class("bg-gray-600"));
    assert!(!second.has_class("bg-blue-600"));
}

#[test]
fn test_custom_theme() {
    let theme = ButtonTheme::new().variant(Variant::Ghost, "text-indigo-700 hover:bg-indigo-50");
    let button = Button::with_theme(ButtonProps::new("x").variant(Variant::Ghost), &theme);
    assert!(button.has_class("text-indigo-700"));
    assert!(!button.has_class("text-gray-900"));
}

#[test]
fn test_attribute_name_cannot_inject_handlers() {
    let button = Button::new(ButtonProps::new("x").attr("data-x onmouseover=alert(1)", "v"));
    let html = button.to_html().unwrap();
    assert!(!html.contains(" onmouseover=alert(1)"));
    assert!(html.ends_with(">x</button>"));
}
