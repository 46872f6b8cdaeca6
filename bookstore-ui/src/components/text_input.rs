//! Text input used by the login form

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputKind {
    Text,
    Password,
}

impl TextInputKind {
    fn as_type(self) -> &'static str {
        match self {
            TextInputKind::Text => "text",
            TextInputKind::Password => "password",
        }
    }
}

#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = TextInputKind::Text)] kind: TextInputKind,
    #[props(default)] label: Option<&'static str>,
    #[props(default)] id: Option<String>,
    #[props(default)] autofocus: bool,
) -> Element {
    rsx! {
        label { class: "block",
            if let Some(label) = label {
                span { class: "block text-sm font-medium text-gray-600 mb-1", "{label}" }
            }
            input {
                r#type: kind.as_type(),
                class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-300 text-gray-800",
                id: id.as_deref(),
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
                onmounted: move |event| async move {
                    if autofocus {
                        let _ = event.data().set_focus(true).await;
                    }
                },
            }
        }
    }
}
