//! Book list admin view - pure rendering, no data fetching
//!
//! Reads `BookListState` through lenses and reports every user action via
//! callbacks. Deleting is two-step: `on_delete` asks the page to open the
//! confirmation, and the dialog answers with `on_confirm_delete` or
//! `on_cancel_delete`.

use crate::components::helpers::{ConfirmDialogView, ErrorDisplay, LoadingSpinner};
use crate::components::icons::{BookOpenIcon, PlusIcon};
use crate::components::{AdminHeaderView, BookTableView, Button, ButtonVariant};
use crate::stores::book_list::{BookListState, BookListStateStoreExt};
use bookstore_common::{book_rows, BookId, CurrencyFormat};
use dioxus::prelude::*;

#[component]
pub fn BookListView(
    state: ReadStore<BookListState>,
    currency: CurrencyFormat,
    on_logout: EventHandler<()>,
    on_add: EventHandler<()>,
    on_edit: EventHandler<BookId>,
    on_delete: EventHandler<BookId>,
    on_confirm_delete: EventHandler<()>,
    on_cancel_delete: EventHandler<()>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let view = state.view().read().clone();
    let pending = state.pending_delete().read().clone();

    let rows = book_rows(&view, &currency);

    let is_open_memo = use_memo(move || state.pending_delete().read().is_some());
    let is_open: ReadSignal<bool> = is_open_memo.into();

    let dialog_message = match &pending {
        Some(p) => match &p.title {
            Some(title) => format!("{} \"{title}\" will be removed from the list.", p.message),
            None => p.message.clone(),
        },
        None => String::new(),
    };

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            AdminHeaderView { on_logout }
            div { class: "container mx-auto px-4 py-8",
                div { class: "flex items-center justify-between mb-6",
                    h2 { class: "text-2xl font-bold text-gray-700", "Manage all books" }
                    Button {
                        variant: ButtonVariant::Primary,
                        test_id: Some("add-book-button".to_string()),
                        onclick: move |_| on_add.call(()),
                        PlusIcon { class: "h-5 w-5" }
                        "Add Book"
                    }
                }
                if let Some(err) = error {
                    ErrorDisplay { message: err }
                }
                if loading {
                    LoadingSpinner {}
                } else if rows.is_empty() {
                    div { class: "text-center py-12 bg-white shadow-md rounded-lg",
                        div { class: "text-gray-300 mb-4",
                            BookOpenIcon { class: "w-16 h-16 mx-auto" }
                        }
                        p { class: "text-gray-500 mb-4", "No books to show." }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_add.call(()),
                            "Add the first book"
                        }
                    }
                } else {
                    BookTableView { rows, on_edit, on_delete }
                }
            }
            ConfirmDialogView {
                is_open,
                title: "Delete book?".to_string(),
                message: dialog_message,
                on_confirm: move |_| on_confirm_delete.call(()),
                on_cancel: move |_| on_cancel_delete.call(()),
            }
        }
    }
}
