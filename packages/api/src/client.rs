//! # Typed HTTP client for the Knowledge Hub backend
//!
//! [`ApiClient`] is a thin wrapper around [`reqwest::Client`] with one method per
//! endpoint. It holds no session state: authenticated calls take the bearer token
//! as an argument, and [`crate::Session`] decides where that token comes from.
//!
//! The same code runs natively (desktop, tests) and in the browser, where reqwest
//! uses `fetch`. The per-request timeout from [`HubConfig`] only applies natively.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use store::HubConfig;

use crate::error::ApiError;
use crate::models::{
    Document, DocumentCreate, DocumentUpdate, RegisterRequest, TokenResponse, UserInfo,
};

/// Client for the Knowledge Hub REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Client with default HTTP settings.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client configured from a [`HubConfig`].
    pub fn from_config(config: &HubConfig) -> Result<Self, ApiError> {
        let base_url = config.api.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ApiError::Config("api.base_url is empty".to_string()));
        }

        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if config.api.timeout_secs > 0 {
                builder =
                    builder.timeout(std::time::Duration::from_secs(config.api.timeout_secs));
            }
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode a JSON body, mapping non-2xx statuses to [`ApiError`].
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::debug!("API request failed with {}: {}", status, body);
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Check whether the backend answers its health endpoint.
    pub async fn health(&self) -> Result<bool, ApiError> {
        let resp = self.http.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    /// Exchange email and password for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let form = [("username", email), ("password", password)];
        self.send(self.http.post(self.url("/auth/login")).form(&form))
            .await
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, email: &str, password: &str) -> Result<UserInfo, ApiError> {
        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send(self.http.post(self.url("/auth/register")).json(&body))
            .await
    }

    /// The user the token belongs to.
    pub async fn me(&self, token: &str) -> Result<UserInfo, ApiError> {
        self.send(self.http.get(self.url("/auth/me")).bearer_auth(token))
            .await
    }

    pub async fn list_documents(&self, token: &str) -> Result<Vec<Document>, ApiError> {
        self.send(self.http.get(self.url("/documents")).bearer_auth(token))
            .await
    }

    pub async fn get_document(&self, token: &str, id: i64) -> Result<Document, ApiError> {
        self.send(
            self.http
                .get(self.url(&format!("/documents/{id}")))
                .bearer_auth(token),
        )
        .await
    }

    pub async fn create_document(
        &self,
        token: &str,
        create: &DocumentCreate,
    ) -> Result<Document, ApiError> {
        create.validate()?;
        self.send(
            self.http
                .post(self.url("/documents"))
                .bearer_auth(token)
                .json(create),
        )
        .await
    }

    pub async fn update_document(
        &self,
        token: &str,
        id: i64,
        update: &DocumentUpdate,
    ) -> Result<Document, ApiError> {
        update.validate()?;
        self.send(
            self.http
                .put(self.url(&format!("/documents/{id}")))
                .bearer_auth(token)
                .json(update),
        )
        .await
    }
}
