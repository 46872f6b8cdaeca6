//! Login page decisions
//!
//! Both ways onto the book list from the login page replace the login entry
//! in history, so Back from the list does not land on the form again.

use crate::config::AdminCredentials;
use crate::navigation::{AdminRoute, Navigator};
use crate::session::{AdminSession, SessionStore};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn,
    Rejected,
}

/// Skip the form when a session already exists. Returns true if it redirected.
pub fn redirect_if_signed_in<S: SessionStore, N: Navigator>(
    session: &AdminSession<S>,
    navigator: &N,
) -> bool {
    if !session.is_authenticated() {
        return false;
    }
    info!("Admin already signed in, skipping login");
    navigator.redirect(AdminRoute::BookList);
    true
}

/// Check the submitted credentials, and on a match start the session and
/// move to the book list.
pub fn submit_login<S: SessionStore, N: Navigator>(
    session: &AdminSession<S>,
    credentials: &AdminCredentials,
    username: &str,
    password: &str,
    navigator: &N,
) -> LoginOutcome {
    if !credentials.matches(username, password) {
        warn!("Rejected sign-in for {username:?}");
        return LoginOutcome::Rejected;
    }
    session.sign_in();
    navigator.redirect(AdminRoute::BookList);
    LoginOutcome::SignedIn
}
