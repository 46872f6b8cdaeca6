use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use tracing::warn;

/// Identifier of a book, stable for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(BookId)
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        BookId(id)
    }
}

/// A catalog entry as handed out by the data-access collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Ordered books owned by one book list view.
///
/// Always replaced wholesale: loading builds a new value and deleting
/// returns a filtered copy. Ids are unique within the sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    books: Vec<Book>,
}

impl ViewState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a view state, keeping the first book for any repeated id.
    pub fn from_books(books: Vec<Book>) -> Self {
        let mut seen = HashSet::with_capacity(books.len());
        let mut unique = Vec::with_capacity(books.len());
        for book in books {
            if seen.insert(book.id) {
                unique.push(book);
            } else {
                warn!("Dropping duplicate book id {} ({})", book.id, book.title);
            }
        }
        Self { books: unique }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn into_books(self) -> Vec<Book> {
        self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn ids(&self) -> Vec<BookId> {
        self.books.iter().map(|b| b.id).collect()
    }

    /// New state without the book matching `id`. Unknown ids yield an equal state.
    pub fn remove_by_id(&self, id: BookId) -> ViewState {
        ViewState {
            books: self.books.iter().filter(|b| b.id != id).cloned().collect(),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_book(id: i64, title: &str) -> Book {
    Book {
        id: BookId(id),
        title: title.to_string(),
        author: "Test Author".to_string(),
        isbn: format!("978-0-00-00000{id}-0"),
        year: 2020,
        price: Some(100.0),
    }
}
