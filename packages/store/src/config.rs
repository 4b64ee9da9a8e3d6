//! # Client configuration — `knowledgehub.toml`
//!
//! Defines the TOML configuration the Knowledge Hub client reads at startup
//! (filename: [`HubConfig::filename`] = `"knowledgehub.toml"`). On desktop the file
//! is layered with environment variables by [`crate::settings::load`]; on the web
//! the defaults apply, with the API URL optionally baked in at build time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"   # backend root, trailing slash optional
//! timeout_secs = 30                    # per-request timeout (native only), 0 = none
//!
//! [session]
//! health_check_interval_secs = 30      # 0 disables the connectivity check
//! token_key = "knowledge_hub_token"    # localStorage key (web only)
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`HubConfig`] | Top-level config. Builder helpers (`with_base_url`, `with_health_check_interval`), TOML (de)serialisation, and the canonical filename. |
//! | [`ApiConfig`] | Where the backend lives and how long to wait for it. |
//! | [`SessionConfig`] | Connectivity polling and token storage key. |
//!
//! All structs implement `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::token::DEFAULT_TOKEN_KEY;

/// Top-level configuration stored in `knowledgehub.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HubConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the Knowledge Hub backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. 0 disables the timeout.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Connectivity check interval in seconds. 0 disables the check.
    #[serde(default = "default_health_check_interval")]
    pub health_check_interval_secs: u32,
    /// Browser storage key for the bearer token.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_health_check_interval() -> u32 {
    30
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            health_check_interval_secs: default_health_check_interval(),
            token_key: default_token_key(),
        }
    }
}

impl HubConfig {
    /// Builder method to point the client at a different backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to set the connectivity check interval.
    pub fn with_health_check_interval(mut self, secs: u32) -> Self {
        self.session.health_check_interval_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "knowledgehub.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
