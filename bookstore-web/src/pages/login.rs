//! Login page

use super::admin_session;
use crate::config::config;
use crate::navigation::RouterNavigator;
use bookstore_common::{redirect_if_signed_in, submit_login, LoginOutcome};
use bookstore_ui::LoginView;
use dioxus::prelude::*;
use std::rc::Rc;

#[component]
pub fn Login() -> Element {
    let session = use_hook(|| Rc::new(admin_session()));
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    // Already signed in: skip the form
    use_effect({
        let session = session.clone();
        move || {
            redirect_if_signed_in(&*session, &RouterNavigator);
        }
    });

    let on_submit = move |_: ()| {
        let outcome = submit_login(
            &*session,
            &config().admin,
            &username.read(),
            &password.read(),
            &RouterNavigator,
        );
        match outcome {
            LoginOutcome::SignedIn => error.set(None),
            LoginOutcome::Rejected => {
                error.set(Some("Invalid username or password".to_string()));
                password.set(String::new());
            }
        }
    };

    rsx! {
        LoginView {
            username: username(),
            password: password(),
            error: error(),
            on_username_change: move |value| username.set(value),
            on_password_change: move |value| password.set(value),
            on_submit,
        }
    }
}
