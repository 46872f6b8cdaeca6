//! Local storage backed session store

use bookstore_common::SessionStore;
use tracing::warn;

fn get_storage() -> Option<web_sys_x::Storage> {
    web_sys_x::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Browser `localStorage`, persisted across reloads
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl SessionStore for LocalStorageSession {
    fn get(&self, key: &str) -> Option<String> {
        get_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match get_storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    warn!("Failed to write {key} to localStorage: {e:?}");
                }
            }
            None => warn!("localStorage unavailable, {key} not saved"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_storage() {
            if let Err(e) = storage.remove_item(key) {
                warn!("Failed to remove {key} from localStorage: {e:?}");
            }
        }
    }
}
