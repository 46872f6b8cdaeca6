//! Book table: one row per book with edit/delete triggers

use crate::components::icons::{PencilIcon, TrashIcon};
use crate::components::ChromelessButton;
use bookstore_common::{BookId, BookRow};
use dioxus::prelude::*;

const COLUMNS: [&str; 7] = ["ID", "Title", "Author", "ISBN", "Year", "Price", "Actions"];

#[component]
pub fn BookTableView(
    rows: Vec<BookRow>,
    on_edit: EventHandler<BookId>,
    on_delete: EventHandler<BookId>,
) -> Element {
    rsx! {
        div { class: "bg-white shadow-md rounded-lg overflow-hidden",
            table { class: "min-w-full divide-y divide-gray-200",
                thead { class: "bg-gray-100",
                    tr {
                        for column in COLUMNS {
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                                "{column}"
                            }
                        }
                    }
                }
                tbody { class: "bg-white divide-y divide-gray-200",
                    for row in rows {
                        BookTableRow {
                            key: "{row.id}",
                            row: row.clone(),
                            on_edit,
                            on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BookTableRow(
    row: BookRow,
    on_edit: EventHandler<BookId>,
    on_delete: EventHandler<BookId>,
) -> Element {
    let id = row.id;
    let cell = "px-6 py-4 whitespace-nowrap text-sm text-gray-900";

    rsx! {
        tr { "data-testid": "book-row-{id}",
            td { class: "px-6 py-4 whitespace-nowrap text-sm text-gray-500", "{id}" }
            td { class: cell, "{row.title}" }
            td { class: cell, "{row.author}" }
            td { class: cell, "{row.isbn}" }
            td { class: cell, "{row.year}" }
            td { class: cell, "{row.price}" }
            td { class: "px-6 py-4 whitespace-nowrap text-sm font-medium space-x-2",
                ChromelessButton {
                    class: Some("text-indigo-600 hover:text-indigo-900 mr-4".to_string()),
                    title: Some("Edit".to_string()),
                    aria_label: Some(format!("Edit book {id}")),
                    onclick: move |_| on_edit.call(id),
                    PencilIcon { class: "h-5 w-5 inline" }
                }
                ChromelessButton {
                    class: Some("text-red-600 hover:text-red-900".to_string()),
                    title: Some("Delete".to_string()),
                    aria_label: Some(format!("Delete book {id}")),
                    onclick: move |_| on_delete.call(id),
                    TrashIcon { class: "h-5 w-5 inline" }
                }
            }
        }
    }
}
