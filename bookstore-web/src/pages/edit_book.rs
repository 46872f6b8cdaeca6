//! Edit book landing page

use super::{admin_session, logout};
use crate::catalog::find_book;
use crate::config::config;
use crate::navigation::RouterNavigator;
use bookstore_common::{guard, AdminRoute, BookId, Navigator};
use bookstore_ui::BookDetailView;
use dioxus::prelude::*;
use std::rc::Rc;

#[component]
pub fn EditBook(book_id: BookId) -> Element {
    let session = use_hook(|| Rc::new(admin_session()));
    let authenticated = session.is_authenticated();

    use_effect(move || {
        guard(&*session, &RouterNavigator);
    });

    if !authenticated {
        return rsx! {};
    }

    rsx! {
        BookDetailView {
            book_id,
            book: find_book(book_id),
            currency: config().currency.clone(),
            on_back: move |_| RouterNavigator.navigate(AdminRoute::BookList),
            on_logout: move |_| logout(),
        }
    }
}
