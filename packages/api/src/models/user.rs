//! # User and credential payloads
//!
//! ## [`UserInfo`]
//!
//! What `GET /auth/me` and `POST /auth/register` return: the backend's numeric user
//! id and the account email. The client never mutates it; it is held in the auth
//! state to render the top bar and to decide which screen the session gate shows.
//!
//! ## [`RegisterRequest`]
//!
//! JSON body for `POST /auth/register`. Login does not use a JSON body: the
//! backend expects an OAuth2 password form (`username`, `password`), built in
//! [`crate::ApiClient::login`].

use serde::{Deserialize, Serialize};

/// User information as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
}

impl UserInfo {
    /// Name to show in the UI.
    pub fn display_name(&self) -> &str {
        &self.email
    }
}

/// Request body for account registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}
