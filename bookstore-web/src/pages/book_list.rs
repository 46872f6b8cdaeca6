//! Book list admin page

use super::admin_session;
use crate::catalog::book_catalog;
use crate::config::config;
use crate::navigation::RouterNavigator;
use crate::storage::LocalStorageSession;
use bookstore_common::{BookId, BookListController, FixtureCatalog, MountOutcome};
use bookstore_ui::stores::{BookListState, BookListStateStoreExt};
use bookstore_ui::BookListView;
use dioxus::prelude::*;
use std::rc::Rc;

type Controller = BookListController<FixtureCatalog, LocalStorageSession, RouterNavigator>;

#[component]
pub fn BookList() -> Element {
    let controller: Rc<Controller> = use_hook(|| {
        Rc::new(BookListController::new(
            book_catalog(),
            admin_session(),
            RouterNavigator,
            config().delete_confirmation.clone(),
        ))
    });

    let state = use_store(|| BookListState {
        loading: true,
        ..Default::default()
    });

    // Guard + load, once per mount
    use_effect({
        let controller = controller.clone();
        move || match controller.on_mount() {
            MountOutcome::RedirectedToLogin => {}
            MountOutcome::Loaded(view) => {
                state.view().set(view);
                state.loading().set(false);
            }
            MountOutcome::LoadFailed(e) => {
                state.error().set(Some(format!("Failed to load books: {e}")));
                state.loading().set(false);
            }
        }
    });

    let on_logout = {
        let controller = controller.clone();
        move |_: ()| controller.logout()
    };
    let on_add = {
        let controller = controller.clone();
        move |_: ()| controller.add_book()
    };
    let on_edit = {
        let controller = controller.clone();
        move |id: BookId| controller.edit_book(id)
    };
    let on_delete = {
        let controller = controller.clone();
        move |id: BookId| {
            let view = state.view().read().clone();
            let pending = controller.request_deletion(&view, id);
            state.pending_delete().set(Some(pending));
        }
    };
    let resolve = move |confirmed: bool| {
        let Some(pending) = state.pending_delete().read().clone() else {
            return;
        };
        let view = state.view().read().clone();
        let next = controller.resolve_deletion(&view, pending, confirmed);
        state.pending_delete().set(None);
        state.view().set(next);
    };
    let resolve_cancel = resolve.clone();

    rsx! {
        BookListView {
            state,
            currency: config().currency.clone(),
            on_logout,
            on_add,
            on_edit,
            on_delete,
            on_confirm_delete: move |_| resolve(true),
            on_cancel_delete: move |_| resolve_cancel(false),
        }
    }
}
