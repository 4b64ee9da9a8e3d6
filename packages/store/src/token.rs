//! # Session token persistence
//!
//! The bearer token issued by `POST /auth/login` must survive a page reload (web) or
//! an app restart (desktop). [`TokenStore`] abstracts over where it lives so the
//! session logic in the `api` crate never needs to know the platform:
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`crate::MemoryTokenStore`] | all | `Arc<Mutex<Option<String>>>`, lost on exit |
//! | [`crate::FileTokenStore`] | native | a single `token` file under the app data dir |
//! | `LocalStorageTokenStore` | WASM + `web` | browser `localStorage` |
//!
//! Implementations swallow their I/O errors: an unreadable token reads as `None`,
//! a failed write is logged. The worst outcome is being asked to sign in again.

/// Default key under which browser storage keeps the token.
pub const DEFAULT_TOKEN_KEY: &str = "knowledge_hub_token";

/// Storage for the current session's bearer token.
pub trait TokenStore {
    /// The persisted token, if any. Empty values read as `None`.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing any previous one.
    fn set(&self, token: &str);

    /// Forget the token.
    fn clear(&self);
}

/// Normalise a raw stored value: surrounding whitespace is dropped and an empty
/// string means "no token".
pub(crate) fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("abc"), Some("abc".to_string()));
        assert_eq!(normalize("  abc\n"), Some("abc".to_string()));
        assert_eq!(normalize(""), None);
        assert_eq!(normalize(" \n\t"), None);
    }
}
