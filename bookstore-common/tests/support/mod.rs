#![allow(dead_code)]

use bookstore_common::{
    AdminRoute, Book, BookCatalog, BookId, CatalogError, ConfirmPrompt, Navigator,
};
use std::cell::{Cell, RefCell};
use std::sync::Once;

static TRACING: Once = Once::new();

pub fn tracing_init() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn book(id: i64, title: &str, price: Option<f64>) -> Book {
    Book {
        id: BookId(id),
        title: title.to_string(),
        author: format!("Author of {title}"),
        isbn: format!("97800000000{id:02}"),
        year: 2000 + id as i32,
        price,
    }
}

/// Catalog that counts how often it is read
pub struct CountingCatalog {
    books: Vec<Book>,
    fail: bool,
    pub calls: Cell<usize>,
}

impl CountingCatalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            fail: false,
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            books: Vec::new(),
            fail: true,
            calls: Cell::new(0),
        }
    }
}

impl BookCatalog for CountingCatalog {
    fn all_books(&self) -> Result<Vec<Book>, CatalogError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(CatalogError::Unavailable("data source offline".to_string()));
        }
        Ok(self.books.clone())
    }
}

/// Navigator that remembers every route it was sent to
#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: RefCell<Vec<AdminRoute>>,
    /// Subset of `routes` that replaced the current history entry
    pub replaced: RefCell<Vec<AdminRoute>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: AdminRoute) {
        self.routes.borrow_mut().push(route);
    }

    fn redirect(&self, route: AdminRoute) {
        self.routes.borrow_mut().push(route);
        self.replaced.borrow_mut().push(route);
    }
}

/// Prompt with a fixed answer that records the questions asked
pub struct ScriptedPrompt {
    answer: bool,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answer
    }
}
