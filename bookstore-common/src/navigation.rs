//! Back-office destinations

use crate::book::BookId;
use std::rc::Rc;

/// Pages the book list can send the admin to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRoute {
    Login,
    BookList,
    AddBook,
    EditBook(BookId),
}

impl AdminRoute {
    pub fn path(&self) -> String {
        match self {
            AdminRoute::Login => "/login".to_string(),
            AdminRoute::BookList => "/store-manager/all-books".to_string(),
            AdminRoute::AddBook => "/store-manager/add-book".to_string(),
            AdminRoute::EditBook(id) => format!("/store-manager/edit-book/{id}"),
        }
    }
}

/// Transitions the application to another page
pub trait Navigator {
    fn navigate(&self, route: AdminRoute);

    /// Like `navigate`, but the current page is replaced in history so Back
    /// does not return to it.
    fn redirect(&self, route: AdminRoute) {
        self.navigate(route)
    }
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn navigate(&self, route: AdminRoute) {
        (**self).navigate(route)
    }

    fn redirect(&self, route: AdminRoute) {
        (**self).redirect(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(AdminRoute::Login.path(), "/login");
        assert_eq!(AdminRoute::AddBook.path(), "/store-manager/add-book");
        assert_eq!(
            AdminRoute::EditBook(BookId(12)).path(),
            "/store-manager/edit-book/12"
        );
    }
}
