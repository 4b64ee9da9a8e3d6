//! # Document payloads
//!
//! | Struct | Endpoint | Notes |
//! |--------|----------|-------|
//! | [`Document`] | responses of `/documents` | Full record including owner and audit timestamps. |
//! | [`DocumentCreate`] | `POST /documents` | Title (1..=200 chars) and non-empty content. |
//! | [`DocumentUpdate`] | `PUT /documents/{id}` | Both fields optional; absent fields are not serialised and stay unchanged server-side. |
//!
//! The backend stores timestamps without an offset on some databases, so
//! `created_at` / `updated_at` accept both RFC 3339 and naive ISO 8601 values; the
//! latter are read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Maximum title length accepted by the backend, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// A stored document owned by the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub owner_id: i64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Body for creating a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentCreate {
    pub title: String,
    pub content: String,
}

impl DocumentCreate {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Check the constraints the backend enforces before sending.
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_title(&self.title)?;
        validate_content(&self.content)
    }
}

/// Body for updating a document. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl DocumentUpdate {
    /// Update replacing both title and content.
    pub fn replace(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(content) = &self.content {
            validate_content(content)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.is_empty() {
        return Err(ApiError::Validation("Title must not be empty".to_string()));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ApiError::Validation(format!(
            "Title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), ApiError> {
    if content.is_empty() {
        return Err(ApiError::Validation("Content must not be empty".to_string()));
    }
    Ok(())
}

/// Parse a backend timestamp, with or without a UTC offset.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc()))
}

mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
