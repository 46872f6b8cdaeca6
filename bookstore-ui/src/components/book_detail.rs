//! Landing views for the add and edit routes
//!
//! Neither one has a form; they only show where the admin ended up.

use crate::components::helpers::{BackButton, ErrorDisplay};
use crate::components::AdminHeaderView;
use bookstore_common::{format_price, Book, BookId, CurrencyFormat};
use dioxus::prelude::*;

/// Read-only view of a single catalog record
#[component]
pub fn BookDetailView(
    book_id: BookId,
    book: Option<Book>,
    currency: CurrencyFormat,
    on_back: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let details = match book {
        Some(book) => rsx! {
            dl { class: "bg-white shadow-md rounded-lg p-6 grid grid-cols-3 gap-4 text-sm",
                dt { class: "text-gray-500", "Title" }
                dd { class: "col-span-2 text-gray-900", "{book.title}" }
                dt { class: "text-gray-500", "Author" }
                dd { class: "col-span-2 text-gray-900", "{book.author}" }
                dt { class: "text-gray-500", "ISBN" }
                dd { class: "col-span-2 text-gray-900", "{book.isbn}" }
                dt { class: "text-gray-500", "Year" }
                dd { class: "col-span-2 text-gray-900", "{book.year}" }
                dt { class: "text-gray-500", "Price" }
                dd { class: "col-span-2 text-gray-900", {format_price(book.price, &currency)} }
            }
        },
        None => rsx! {
            ErrorDisplay { message: format!("Book {book_id} not found") }
        },
    };

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            AdminHeaderView { on_logout }
            div { class: "container mx-auto px-4 py-8",
                BackButton { on_click: on_back }
                h2 { class: "text-2xl font-bold text-gray-700 mb-6", "Edit book #{book_id}" }
                {details}
            }
        }
    }
}

#[component]
pub fn AddBookNoticeView(on_back: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-50",
            AdminHeaderView { on_logout }
            div { class: "container mx-auto px-4 py-8",
                BackButton { on_click: on_back }
                h2 { class: "text-2xl font-bold text-gray-700 mb-4", "Add book" }
                p { class: "text-gray-500",
                    "New books are created by the catalog team. This page only marks the hand-off."
                }
            }
        }
    }
}
