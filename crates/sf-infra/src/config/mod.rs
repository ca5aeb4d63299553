//! # Engine config loader
//!
//! Reads the TOML file and hands it to [`EngineConfig::from_toml_str`], which
//! owns defaults and validation.

use std::path::{Path, PathBuf};

use anyhow::Context;
use sf_core::config::EngineConfig;
use tracing::{debug, info};

const APP_DIR: &str = "signup-form";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/signup-form/config.toml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load and validate an engine config from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read, is not valid TOML, or holds
/// out-of-range values.
pub fn load_engine_config(config_path: &Path) -> anyhow::Result<EngineConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config = EngineConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid engine config: {}", config_path.display()))?;
    info!(path = %config_path.display(), "engine config loaded");
    Ok(config)
}

/// Like [`load_engine_config`], but a missing file yields the defaults.
pub fn load_or_default(config_path: &Path) -> anyhow::Result<EngineConfig> {
    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(EngineConfig::default());
    }
    load_engine_config(config_path)
}
