//! Bundled book catalog
//!
//! Stands in for the store's data-access layer: the list page reads it, but
//! nothing ever writes back.

use bookstore_common::{Book, BookCatalog, BookId, FixtureCatalog};
use tracing::warn;

const BOOKS_JSON: &str = include_str!("../fixtures/books.json");

pub fn book_catalog() -> FixtureCatalog {
    FixtureCatalog::new(BOOKS_JSON)
}

/// Catalog record for `id`, if any
pub fn find_book(id: BookId) -> Option<Book> {
    match book_catalog().all_books() {
        Ok(books) => books.into_iter().find(|b| b.id == id),
        Err(e) => {
            warn!("Failed to read catalog: {e}");
            None
        }
    }
}
