//! Book list admin page lifecycle
//!
//! One controller per mounted view. `on_mount` runs the session guard and then
//! loads the catalog; the remaining methods are the page's actions. View
//! state is passed in and returned by value so the caller (a UI store, a
//! test) stays the single owner.
//!
//! Deletions only ever filter the local view state. The catalog is not told,
//! so a reload brings the book back.

use crate::book::{BookId, ViewState};
use crate::catalog::BookCatalog;
use crate::confirm::ConfirmPrompt;
use crate::error::CatalogError;
use crate::navigation::{AdminRoute, Navigator};
use crate::session::{AdminSession, SessionStore};
use tracing::{debug, info, warn};

/// Result of activating the book list
#[derive(Debug)]
pub enum MountOutcome {
    /// No admin session; the navigator was sent to the login page and nothing was loaded
    RedirectedToLogin,
    /// Fresh view state holding the whole catalog
    Loaded(ViewState),
    /// The catalog could not be read; the view should show an empty list with the error
    LoadFailed(CatalogError),
}

/// A delete waiting for the user's answer
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDeletion {
    pub book_id: BookId,
    /// Title of the matching book, if it is in the view
    pub title: Option<String>,
    pub message: String,
}

/// Send unauthenticated visitors to the login page.
///
/// Returns true when the caller may proceed.
pub fn guard<S: SessionStore, N: Navigator>(session: &AdminSession<S>, navigator: &N) -> bool {
    if session.is_authenticated() {
        return true;
    }
    info!("No admin session, redirecting to login");
    navigator.redirect(AdminRoute::Login);
    false
}

/// Drop the session flag and go to the login page.
pub fn sign_out<S: SessionStore, N: Navigator>(session: &AdminSession<S>, navigator: &N) {
    session.clear();
    navigator.redirect(AdminRoute::Login);
}

pub struct BookListController<C, S, N> {
    catalog: C,
    session: AdminSession<S>,
    navigator: N,
    delete_confirmation: String,
}

impl<C, S, N> BookListController<C, S, N>
where
    C: BookCatalog,
    S: SessionStore,
    N: Navigator,
{
    pub fn new(
        catalog: C,
        session: AdminSession<S>,
        navigator: N,
        delete_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            session,
            navigator,
            delete_confirmation: delete_confirmation.into(),
        }
    }

    pub fn session(&self) -> &AdminSession<S> {
        &self.session
    }

    /// Guard, then load. Call once per view activation.
    pub fn on_mount(&self) -> MountOutcome {
        if !guard(&self.session, &self.navigator) {
            return MountOutcome::RedirectedToLogin;
        }

        match self.catalog.all_books() {
            Ok(books) => {
                let state = ViewState::from_books(books);
                info!("Loaded {} books", state.len());
                MountOutcome::Loaded(state)
            }
            Err(e) => {
                warn!("Failed to load books: {e}");
                MountOutcome::LoadFailed(e)
            }
        }
    }

    pub fn logout(&self) {
        sign_out(&self.session, &self.navigator);
    }

    pub fn add_book(&self) {
        self.navigator.navigate(AdminRoute::AddBook);
    }

    pub fn edit_book(&self, id: BookId) {
        self.navigator.navigate(AdminRoute::EditBook(id));
    }

    /// First half of a delete: describe what the user is asked to confirm.
    pub fn request_deletion(&self, state: &ViewState, id: BookId) -> PendingDeletion {
        debug!("Delete requested for book {id}");
        PendingDeletion {
            book_id: id,
            title: state.get(id).map(|b| b.title.clone()),
            message: self.delete_confirmation.clone(),
        }
    }

    /// Second half of a delete: apply the user's answer.
    pub fn resolve_deletion(
        &self,
        state: &ViewState,
        pending: PendingDeletion,
        confirmed: bool,
    ) -> ViewState {
        if !confirmed {
            debug!("Delete of book {} cancelled", pending.book_id);
            return state.clone();
        }
        let next = state.remove_by_id(pending.book_id);
        info!(
            "Removed book {} from the list ({} remaining)",
            pending.book_id,
            next.len()
        );
        next
    }

    /// Ask `prompt` and delete on yes, in one synchronous step.
    pub fn delete_book<P: ConfirmPrompt + ?Sized>(
        &self,
        state: &ViewState,
        id: BookId,
        prompt: &P,
    ) -> ViewState {
        let pending = self.request_deletion(state, id);
        let confirmed = prompt.confirm(&pending.message);
        self.resolve_deletion(state, pending, confirmed)
    }
}
