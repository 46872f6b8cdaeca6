//! Router-backed navigation

use crate::Route;
use bookstore_common::{AdminRoute, Navigator};
use dioxus::prelude::*;

impl From<AdminRoute> for Route {
    fn from(route: AdminRoute) -> Self {
        match route {
            AdminRoute::Login => Route::Login {},
            AdminRoute::BookList => Route::BookList {},
            AdminRoute::AddBook => Route::AddBook {},
            AdminRoute::EditBook(book_id) => Route::EditBook { book_id },
        }
    }
}

/// Navigates with the Dioxus router of the current component tree.
///
/// Must be used from event handlers or effects so the router context is in scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
    fn navigate(&self, route: AdminRoute) {
        navigator().push(Route::from(route));
    }

    fn redirect(&self, route: AdminRoute) {
        navigator().replace(Route::from(route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_common::BookId;

    #[test]
    fn test_router_paths_match_admin_routes() {
        for route in [
            AdminRoute::Login,
            AdminRoute::BookList,
            AdminRoute::AddBook,
            AdminRoute::EditBook(BookId(7)),
        ] {
            assert_eq!(Route::from(route).to_string(), route.path());
        }
    }

    #[test]
    fn test_edit_route_parses_book_id() {
        let route: Route = "/store-manager/edit-book/42".parse().unwrap();
        assert_eq!(route, Route::EditBook { book_id: BookId(42) });
    }
}
