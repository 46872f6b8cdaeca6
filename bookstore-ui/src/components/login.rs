//! Admin login form

use crate::components::icons::LockIcon;
use crate::components::{Button, ButtonVariant, ErrorDisplay, TextInput, TextInputKind};
use dioxus::prelude::*;

#[component]
pub fn LoginView(
    username: String,
    password: String,
    #[props(default)] error: Option<String>,
    on_username_change: EventHandler<String>,
    on_password_change: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gradient-to-r from-blue-100 to-pink-100",
            form {
                class: "bg-white shadow-lg rounded-lg p-8 w-full max-w-sm space-y-4",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                div { class: "flex items-center space-x-2 text-gray-700 mb-2",
                    LockIcon { class: "h-6 w-6" }
                    h1 { class: "text-xl font-bold", "Back office sign in" }
                }
                if let Some(message) = error {
                    ErrorDisplay { message }
                }
                TextInput {
                    value: username,
                    on_input: on_username_change,
                    label: Some("Username"),
                    id: Some("login-username".to_string()),
                    autofocus: true,
                }
                TextInput {
                    value: password,
                    on_input: on_password_change,
                    kind: TextInputKind::Password,
                    label: Some("Password"),
                    id: Some("login-password".to_string()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: Some("submit"),
                    class: Some("w-full justify-center".to_string()),
                    onclick: |_| {},
                    "Sign in"
                }
            }
        }
    }
}
