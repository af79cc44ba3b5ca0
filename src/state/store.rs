//! Persisted token slots.
//!
//! The browser original kept two opaque strings in session-scoped storage
//! under fixed keys. `TokenStore` is that seam: the default in-memory
//! implementation backs tests and the CLI, and an embedding frontend can
//! supply its own storage.

use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key for the persisted access token.
pub const ACCESS_TOKEN_KEY: &str = "auth_token";
/// Storage key for the persisted refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Key-value slots for persisted tokens.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Remove both token slots.
pub fn clear_tokens(store: &dyn TokenStore) {
    store.remove(ACCESS_TOKEN_KEY);
    store.remove(REFRESH_TOKEN_KEY);
}

/// In-memory `TokenStore`. The mutex is interior mutability for the shared
/// handle, not flow coordination.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.into(), value.into());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
