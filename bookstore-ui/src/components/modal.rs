//! Modal built on the native `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, focus trapping and Escape-to-close
//! for free. `showModal()` throws when the dialog is already open, so the
//! effect checks the `open` attribute before calling either method.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

static NEXT_DIALOG_ID: AtomicU64 = AtomicU64::new(0);

fn call_dialog_method(element: &web_sys_x::Element, method: &str) {
    if let Ok(value) = js_sys_x::Reflect::get(element, &method.into()) {
        if let Some(func) = value.dyn_ref::<js_sys_x::Function>() {
            if let Err(e) = func.call0(element) {
                tracing::warn!("dialog.{method}() failed: {e:?}");
            }
        }
    }
}

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Escape key or backdrop click
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| {
        format!(
            "dialog-{}",
            NEXT_DIALOG_ID.fetch_add(1, Ordering::Relaxed)
        )
    });
    let effect_id = dialog_id.clone();

    use_effect(move || {
        let want_open = is_open();

        let Some(element) = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&effect_id))
        else {
            return;
        };

        let currently_open = element.has_attribute("open");
        if want_open && !currently_open {
            call_dialog_method(&element, "showModal");
        } else if !want_open && currently_open {
            call_dialog_method(&element, "close");
        }
    });

    // No display classes on <dialog> itself: they would override the native
    // display:none of a closed dialog.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/50",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
