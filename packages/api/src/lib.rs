//! # API crate — typed client for the Knowledge Hub backend
//!
//! This crate is everything the frontends know about the backend. It defines the wire
//! models, the HTTP client, and the session flows (sign in, silent re-authentication,
//! sign out) built on top of a [`store::TokenStore`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one async method per endpoint, bearer token passed explicitly |
//! | [`session`] | [`Session`]: binds a client to a token store and implements the auth flows |
//! | [`models`] | `UserInfo`, `Document`, `DocumentCreate`, `DocumentUpdate`, `TokenResponse` |
//! | [`error`] | [`ApiError`] and mapping of backend `detail` payloads to flat messages |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | `POST` | `/auth/login` (form: `username`, `password`) | — |
//! | `POST` | `/auth/register` | — |
//! | `GET` | `/auth/me` | bearer |
//! | `GET` / `POST` | `/documents` | bearer |
//! | `GET` / `PUT` | `/documents/{id}` | bearer |
//! | `GET` | `/health` | — |

pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{Document, DocumentCreate, DocumentUpdate, TokenResponse, UserInfo};
pub use session::Session;

pub use store::HubConfig;
