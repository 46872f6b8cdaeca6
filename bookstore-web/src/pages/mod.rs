mod add_book;
mod book_list;
mod edit_book;
mod login;

pub use add_book::AddBook;
pub use book_list::BookList;
pub use edit_book::EditBook;
pub use login::Login;

use crate::config::config;
use crate::navigation::RouterNavigator;
use crate::storage::LocalStorageSession;
use bookstore_common::{sign_out, AdminSession};

fn admin_session() -> AdminSession<LocalStorageSession> {
    AdminSession::new(LocalStorageSession, config().session_key.clone())
}

/// Header logout for pages without a book list controller
fn logout() {
    sign_out(&admin_session(), &RouterNavigator);
}
