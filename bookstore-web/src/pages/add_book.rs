//! Add book landing page

use super::{admin_session, logout};
use crate::navigation::RouterNavigator;
use bookstore_common::{guard, AdminRoute, Navigator};
use bookstore_ui::AddBookNoticeView;
use dioxus::prelude::*;
use std::rc::Rc;

#[component]
pub fn AddBook() -> Element {
    let session = use_hook(|| Rc::new(admin_session()));
    let authenticated = session.is_authenticated();

    use_effect(move || {
        guard(&*session, &RouterNavigator);
    });

    if !authenticated {
        return rsx! {};
    }

    rsx! {
        AddBookNoticeView {
            on_back: move |_| RouterNavigator.navigate(AdminRoute::BookList),
            on_logout: move |_| logout(),
        }
    }
}
