//! Book catalog access
//!
//! The book list only ever reads the catalog; there is deliberately no
//! delete or update operation here.

use crate::book::Book;
use crate::error::CatalogError;
use serde::Deserialize;
use std::cell::OnceCell;
use tracing::debug;

/// Synchronous, read-only source of every book known to the store
pub trait BookCatalog {
    fn all_books(&self) -> Result<Vec<Book>, CatalogError>;
}

impl<T: BookCatalog + ?Sized> BookCatalog for std::rc::Rc<T> {
    fn all_books(&self) -> Result<Vec<Book>, CatalogError> {
        (**self).all_books()
    }
}

/// Catalog backed by a fixed list of books
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    books: Vec<Book>,
}

impl StaticCatalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl BookCatalog for StaticCatalog {
    fn all_books(&self) -> Result<Vec<Book>, CatalogError> {
        Ok(self.books.clone())
    }
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    books: Vec<Book>,
}

/// Catalog parsed from JSON fixture data compiled into the binary.
///
/// Expected shape: `{ "books": [ { "id": 1, "title": ..., ... } ] }`.
/// Parsing happens on first successful read and is cached afterwards.
pub struct FixtureCatalog {
    json: &'static str,
    parsed: OnceCell<Vec<Book>>,
}

impl FixtureCatalog {
    pub fn new(json: &'static str) -> Self {
        Self {
            json,
            parsed: OnceCell::new(),
        }
    }
}

impl BookCatalog for FixtureCatalog {
    fn all_books(&self) -> Result<Vec<Book>, CatalogError> {
        if let Some(books) = self.parsed.get() {
            return Ok(books.clone());
        }
        let file: FixtureFile = serde_json::from_str(self.json)?;
        debug!("Parsed {} books from fixture", file.books.len());
        Ok(self.parsed.get_or_init(|| file.books).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{test_book, BookId};

    const FIXTURE: &str = r#"{
        "books": [
            {"id": 1, "title": "Dune", "author": "Frank Herbert", "isbn": "9780441013593", "year": 1965, "price": 450.0},
            {"id": 2, "title": "Neuromancer", "author": "William Gibson", "isbn": "9780441569595", "year": 1984}
        ]
    }"#;

    #[test]
    fn test_fixture_catalog_parses_books() {
        let catalog = FixtureCatalog::new(FIXTURE);
        let books = catalog.all_books().unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[1].id, BookId(2));
        assert_eq!(books[1].price, None);
        // second read served from cache
        assert_eq!(catalog.all_books().unwrap(), books);
    }

    #[test]
    fn test_fixture_catalog_reports_malformed_json() {
        let catalog = FixtureCatalog::new(r#"{"books": [{"id": "x"}]}"#);
        assert!(matches!(
            catalog.all_books(),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_static_catalog_returns_copy() {
        let catalog = StaticCatalog::new(vec![test_book(3, "C")]);
        assert_eq!(catalog.all_books().unwrap(), vec![test_book(3, "C")]);
    }
}
