//! # Client errors
//!
//! Every failure the client can hit is an [`ApiError`]. The UI does not branch on
//! the variants beyond "was I signed out?" ([`ApiError::is_unauthorized`]); it shows
//! the `Display` text as a single flat message. Variants therefore carry the
//! backend's own wording where there is one.
//!
//! The backend reports failures as `{"detail": "..."}`, or for request validation
//! errors as `{"detail": [{"loc": [...], "msg": "...", ...}]}`.
//! [`ApiError::from_response`] extracts a readable message from either shape and
//! falls back to the raw body, then to the HTTP reason phrase.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("Not signed in")]
    MissingToken,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Build an error from a non-success HTTP status and its body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_detail(body).unwrap_or_else(|| fallback_message(status, body));
        match status {
            400 => ApiError::BadRequest(message),
            401 | 403 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            422 => ApiError::Validation(message),
            _ => ApiError::Status { status, message },
        }
    }

    /// Whether the error means the token is missing, expired or rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::MissingToken)
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => {
            let first = items.first()?;
            let msg = first.get("msg")?.as_str()?;
            let field = first
                .get("loc")
                .and_then(Value::as_array)
                .and_then(|loc| loc.last())
                .and_then(Value::as_str);
            Some(match field {
                Some(field) => format!("{field}: {msg}"),
                None => msg.to_string(),
            })
        }
        _ => None,
    }
}

fn fallback_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() && !body.starts_with('{') && !body.starts_with('<') {
        return body.to_string();
    }
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}
