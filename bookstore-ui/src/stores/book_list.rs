//! Book list page state store

use bookstore_common::{PendingDeletion, ViewState};
use dioxus::prelude::*;

/// State for the book list admin view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct BookListState {
    /// Books currently shown; replaced wholesale on load and delete
    pub view: ViewState,
    /// True until the first mount has resolved
    pub loading: bool,
    /// Error message if loading failed
    pub error: Option<String>,
    /// Delete awaiting confirmation, if the dialog is open
    pub pending_delete: Option<PendingDeletion>,
}
