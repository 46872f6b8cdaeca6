//! Admin session flag
//!
//! The back office gates its pages on a single persisted marker. It is a
//! coarse check, not a verified credential.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::info;

/// Value the session flag must hold for the admin to count as signed in
pub const SESSION_FLAG_VALUE: &str = "true";

/// Key-value store holding the session flag (browser localStorage on the web)
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-process session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Authentication context injected into admin pages
#[derive(Debug, Clone)]
pub struct AdminSession<S> {
    store: S,
    key: String,
}

impl<S: SessionStore> AdminSession<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// True only when the flag holds exactly `"true"`.
    pub fn is_authenticated(&self) -> bool {
        self.store.get(&self.key).as_deref() == Some(SESSION_FLAG_VALUE)
    }

    pub fn sign_in(&self) {
        info!("Admin session started");
        self.store.set(&self.key, SESSION_FLAG_VALUE);
    }

    pub fn clear(&self) {
        info!("Admin session cleared");
        self.store.remove(&self.key);
    }
}
