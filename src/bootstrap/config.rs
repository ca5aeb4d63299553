//! # Configuration bootstrap
//!
//! Decides which file to load. Parsing and validation live in `sf-infra` and
//! `sf-core`.

use std::ffi::OsString;
use std::path::PathBuf;

use sf_core::EngineConfig;
use sf_infra::config::{default_config_path, load_engine_config, load_or_default};
use tracing::info;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SIGNUP_FORM_CONFIG";

/// Where the config comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by [`CONFIG_ENV`]; the file must exist.
    Explicit(PathBuf),
    /// Platform config dir; a missing file means defaults.
    Default(PathBuf),
    /// No config dir on this platform.
    BuiltIn,
}

impl ConfigSource {
    pub fn resolve(env_value: Option<OsString>) -> Self {
        match env_value.filter(|value| !value.is_empty()) {
            Some(path) => ConfigSource::Explicit(PathBuf::from(path)),
            None => default_config_path().map_or(ConfigSource::BuiltIn, ConfigSource::Default),
        }
    }

    pub fn load(&self) -> anyhow::Result<EngineConfig> {
        match self {
            ConfigSource::Explicit(path) => load_engine_config(path),
            ConfigSource::Default(path) => load_or_default(path),
            ConfigSource::BuiltIn => Ok(EngineConfig::default()),
        }
    }
}

/// Load the engine config for this process.
pub fn load_config() -> anyhow::Result<EngineConfig> {
    let source = ConfigSource::resolve(std::env::var_os(CONFIG_ENV));
    info!(?source, "resolving engine config");
    source.load()
}
