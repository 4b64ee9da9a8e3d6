//! Layered settings for native builds: defaults, then `knowledgehub.toml`, then
//! `KNOWLEDGE_HUB__SECTION__KEY` environment variables.

use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};

use crate::config::HubConfig;

/// Environment variable prefix, e.g. `KNOWLEDGE_HUB__API__BASE_URL`.
pub const ENV_PREFIX: &str = "KNOWLEDGE_HUB";

/// Load settings, reading the optional config file from `dir`.
pub fn load(dir: &Path) -> Result<HubConfig, ConfigError> {
    load_with_env(dir, Environment::with_prefix(ENV_PREFIX).separator("__"))
}

fn load_with_env(dir: &Path, env: Environment) -> Result<HubConfig, ConfigError> {
    let defaults = HubConfig::default();
    let path = dir.join(HubConfig::filename());

    let config = Config::builder()
        .set_default("api.base_url", defaults.api.base_url)?
        .set_default("api.timeout_secs", defaults.api.timeout_secs as i64)?
        .set_default(
            "session.health_check_interval_secs",
            i64::from(defaults.session.health_check_interval_secs),
        )?
        .set_default("session.token_key", defaults.session.token_key)?
        .add_source(File::from(path).format(FileFormat::Toml).required(false))
        .add_source(env.try_parsing(true))
        .build()?;

    config.try_deserialize()
}
