//! Confirm dialog view component

use crate::components::{Button, ButtonVariant, Modal};
use dioxus::prelude::*;

/// Yes/no dialog; answers arrive through `on_confirm` / `on_cancel`
#[component]
pub fn ConfirmDialogView(
    is_open: ReadSignal<bool>,
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default = true)] is_destructive: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_variant = if is_destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        Modal { is_open, on_close: move |_| on_cancel.call(()),
            div {
                class: "bg-white rounded-lg shadow-xl p-6 max-w-md w-full mx-4",
                "data-testid": "confirm-dialog",
                h2 { class: "text-lg font-bold text-gray-800 mb-3", "{title}" }
                p { class: "text-gray-600 mb-6", "{message}" }
                div { class: "flex gap-3 justify-end",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    Button {
                        variant: confirm_variant,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
