//! Shared session constructor for all platforms.
//!
//! Returns an [`api::Session`] backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via `store::LocalStorageTokenStore`
//! - **WASM without `web`**: one in-memory token shared by every session, lost on reload
//! - **Desktop** (native): a token file under `<data_dir>/knowledge-hub/`
//!
//! Configuration is read once per process. Natively it comes from
//! `<config_dir>/knowledge-hub/knowledgehub.toml` layered with `KNOWLEDGE_HUB__*`
//! environment variables; on the web the API URL can be baked in at build time with
//! `KNOWLEDGE_HUB_API_URL`.

use std::sync::OnceLock;

use api::{ApiClient, Session};
use store::HubConfig;

const APP_DIR: &str = "knowledge-hub";

static CONFIG: OnceLock<HubConfig> = OnceLock::new();

/// The client configuration for this process.
pub fn hub_config() -> &'static HubConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> HubConfig {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(APP_DIR);
    match store::settings::load(&dir) {
        Ok(config) => {
            tracing::info!("Using Knowledge Hub API at {}", config.api.base_url);
            config
        }
        Err(e) => {
            tracing::warn!("Invalid settings in {}, using defaults: {}", dir.display(), e);
            HubConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> HubConfig {
    match option_env!("KNOWLEDGE_HUB_API_URL") {
        Some(url) => HubConfig::default().with_base_url(url),
        None => HubConfig::default(),
    }
}

/// Create an API client from the process configuration.
pub fn make_client() -> ApiClient {
    let config = hub_config();
    ApiClient::from_config(config).unwrap_or_else(|e| {
        tracing::error!("Falling back to default HTTP client: {}", e);
        ApiClient::new(&config.api.base_url)
    })
}

/// Create a platform-appropriate session.
pub fn make_session() -> Session<impl store::TokenStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let key = &hub_config().session.token_key;
        Session::new(make_client(), store::LocalStorageTokenStore::with_key(key))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Session::new(make_client(), store::MemoryTokenStore::shared())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR);
        Session::new(make_client(), store::FileTokenStore::new(base))
    }
}
