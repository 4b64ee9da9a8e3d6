//! # Session — the client's auth flows over a [`TokenStore`]
//!
//! [`Session`] pairs an [`ApiClient`] with a [`TokenStore`] and implements the three
//! flows the UI needs:
//!
//! 1. **Sign in** ([`login`](Session::login)): exchange credentials for a token,
//!    persist it, then fetch the current user with it.
//! 2. **Silent re-authentication** ([`restore`](Session::restore)): on startup, if a
//!    token was persisted, validate it by fetching the current user. Any failure
//!    clears the token, so a stale token never outlives one reload.
//! 3. **Sign out** ([`logout`](Session::logout)): forget the token. There is no
//!    server-side session to end.
//!
//! Document operations read the token from the store on every call and fail fast
//! with [`ApiError::MissingToken`] when there is none.
//!
//! A `Session` is cheap to build; the UI constructs one per operation the same way
//! it would open a store, and the token store is the only state that persists.

use store::TokenStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Document, DocumentCreate, DocumentUpdate, UserInfo};

/// An [`ApiClient`] bound to a persisted bearer token.
pub struct Session<S: TokenStore> {
    client: ApiClient,
    tokens: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(client: ApiClient, tokens: S) -> Self {
        Self { client, tokens }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The persisted token, if any.
    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    pub fn has_token(&self) -> bool {
        self.tokens.get().is_some()
    }

    fn require_token(&self) -> Result<String, ApiError> {
        self.tokens.get().ok_or(ApiError::MissingToken)
    }

    /// Sign in and return the current user.
    ///
    /// The token is persisted as soon as the backend issues it.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo, ApiError> {
        let token = self.client.login(email, password).await?;
        self.tokens.set(&token.access_token);
        let user = self.client.me(&token.access_token).await?;
        tracing::info!("Signed in as {}", user.email);
        Ok(user)
    }

    /// Create an account, then sign in with the same credentials.
    pub async fn register(&self, email: &str, password: &str) -> Result<UserInfo, ApiError> {
        let created = self.client.register(email, password).await?;
        tracing::info!("Registered account {}", created.email);
        self.login(email, password).await
    }

    /// Re-validate a persisted token. Returns `None` when there is no usable session.
    pub async fn restore(&self) -> Option<UserInfo> {
        let token = self.tokens.get()?;
        match self.client.me(&token).await {
            Ok(user) => {
                tracing::info!("Restored session for {}", user.email);
                Some(user)
            }
            Err(e) => {
                tracing::warn!("Discarding persisted session token: {}", e);
                self.tokens.clear();
                None
            }
        }
    }

    /// Forget the persisted token.
    pub fn logout(&self) {
        self.tokens.clear();
        tracing::info!("Signed out");
    }

    /// Documents of the signed-in user, in backend order.
    pub async fn documents(&self) -> Result<Vec<Document>, ApiError> {
        let token = self.require_token()?;
        self.client.list_documents(&token).await
    }

    pub async fn document(&self, id: i64) -> Result<Document, ApiError> {
        let token = self.require_token()?;
        self.client.get_document(&token, id).await
    }

    pub async fn create_document(&self, create: &DocumentCreate) -> Result<Document, ApiError> {
        let token = self.require_token()?;
        let doc = self.client.create_document(&token, create).await?;
        tracing::debug!("Created document {}", doc.id);
        Ok(doc)
    }

    pub async fn update_document(
        &self,
        id: i64,
        update: &DocumentUpdate,
    ) -> Result<Document, ApiError> {
        let token = self.require_token()?;
        let doc = self.client.update_document(&token, id, update).await?;
        tracing::debug!("Updated document {}", doc.id);
        Ok(doc)
    }
}
