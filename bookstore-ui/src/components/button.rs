//! Buttons

use dioxus::prelude::*;

/// Unstyled button: handles the disabled state and accessibility attributes.
/// Used directly for icon-only row actions.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] test_id: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            "data-testid": test_id.as_deref(),
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Blue fill, main action of a page
    Primary,
    /// Gray fill, cancel/back
    Secondary,
    /// Red fill, destructive
    Danger,
    /// Translucent white, sits on the gradient header
    Ghost,
}

/// Styled button
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] test_id: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "bg-blue-500 hover:bg-blue-600 text-white",
        ButtonVariant::Secondary => "bg-gray-200 hover:bg-gray-300 text-gray-700",
        ButtonVariant::Danger => "bg-red-500 hover:bg-red-600 text-white",
        ButtonVariant::Ghost => "bg-white/20 hover:bg-white/30 text-white",
    };

    let computed_class = format!(
        "inline-flex items-center gap-2 rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed px-4 py-2 {variant_class} {}",
        class.as_deref().unwrap_or_default()
    );

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(computed_class),
            r#type,
            test_id,
            onclick,
            {children}
        }
    }
}
