//! Back-office header bar

use crate::components::icons::{BookOpenIcon, LogOutIcon};
use crate::components::{Button, ButtonVariant};
use dioxus::prelude::*;

/// Gradient header with the store name and a log out button
#[component]
pub fn AdminHeaderView(
    #[props(default = "BookStore - BackOffice".to_string())] title: String,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        header { class: "bg-gradient-to-r from-blue-200 to-pink-200 text-white shadow-lg",
            div { class: "container mx-auto px-4 py-6",
                div { class: "flex justify-between items-center",
                    div { class: "flex items-center space-x-3",
                        BookOpenIcon { class: "h-8 w-8 text-white" }
                        h1 { class: "text-2xl font-bold", "{title}" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        test_id: Some("logout-button".to_string()),
                        onclick: move |_| on_logout.call(()),
                        LogOutIcon { class: "h-5 w-5" }
                        span { "Log out" }
                    }
                }
            }
        }
    }
}
