//! bookstore-common - Shared back-office logic
//!
//! Pure types and decision logic for the book list admin page. Nothing here
//! touches the DOM; the web app plugs browser-backed collaborators into the
//! traits defined in this crate.

pub mod book;
pub mod book_list;
pub mod catalog;
pub mod config;
pub mod confirm;
pub mod currency;
pub mod error;
pub mod login;
pub mod navigation;
pub mod render;
pub mod session;

pub use book::{Book, BookId, ViewState};
pub use book_list::{guard, sign_out, BookListController, MountOutcome, PendingDeletion};
pub use catalog::{BookCatalog, FixtureCatalog, StaticCatalog};
pub use config::{AdminCredentials, BackofficeConfig};
pub use confirm::ConfirmPrompt;
pub use currency::{format_price, CurrencyFormat};
pub use error::{CatalogError, ConfigError};
pub use login::{redirect_if_signed_in, submit_login, LoginOutcome};
pub use navigation::{AdminRoute, Navigator};
pub use render::{book_rows, BookRow};
pub use session::{AdminSession, MemorySessionStore, SessionStore, SESSION_FLAG_VALUE};
