//! # localStorage token store — browser-side persistence
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web platform**. The
//! token lives in `window.localStorage` under a single key, so a reload of the page
//! keeps the user signed in until they log out or the token stops validating.
//!
//! All methods degrade silently when storage is unavailable (private browsing,
//! storage disabled): reads return `None`, writes are logged and dropped.

use web_sys::Storage;

use crate::token::{normalize, TokenStore, DEFAULT_TOKEN_KEY};

/// localStorage-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageTokenStore {
    /// Store using [`DEFAULT_TOKEN_KEY`].
    pub fn new() -> Self {
        Self::with_key(DEFAULT_TOKEN_KEY)
    }

    /// Store using a custom key.
    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        let value = self.storage()?.get_item(&self.key).ok()??;
        normalize(&value)
    }

    fn set(&self, token: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable; session token not persisted");
            return;
        };
        if storage.set_item(&self.key, token.trim()).is_err() {
            tracing::warn!("Failed to write session token to localStorage");
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
