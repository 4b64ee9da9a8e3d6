use std::sync::{Arc, Mutex, OnceLock};

use crate::token::{normalize, TokenStore};

/// In-memory TokenStore for testing and as a fallback when nothing persistent is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the process-wide store. Every call shares the same token.
    pub fn shared() -> Self {
        static SHARED: OnceLock<MemoryTokenStore> = OnceLock::new();
        SHARED.get_or_init(Self::new).clone()
    }

    /// Create a store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = normalize(token);
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
