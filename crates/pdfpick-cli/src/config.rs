//! CLI configuration, stored as TOML.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Proxy used when none is configured.
pub const DEFAULT_PROXY: &str = "http://localhost:8080";

/// Persisted CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Base URL of the search proxy.
    #[serde(default = "default_proxy")]
    pub proxy: String,
    /// HubSpot private app token.
    #[serde(default)]
    pub access_token: Option<String>,
    /// The picked PDF URL; empty when nothing is selected.
    #[serde(default)]
    pub field_value: String,
}

fn default_proxy() -> String {
    DEFAULT_PROXY.to_owned()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            proxy: default_proxy(),
            access_token: None,
            field_value: String::new(),
        }
    }
}

/// Return the config file path: `$PDFPICK_CONFIG`, else `~/.pdfpick/config.toml`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("PDFPICK_CONFIG") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_owned());
    PathBuf::from(home).join(".pdfpick").join("config.toml")
}

/// Directory holding the result cache, next to the config file.
#[must_use]
pub fn cache_dir_for(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map_or_else(|| PathBuf::from("cache"), |dir| dir.join("cache"))
}

/// Write `cfg` to `path`, creating parent directories if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn save_config(cfg: &CliConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string(cfg)?)?;
    Ok(())
}

/// Load and deserialize a [`CliConfig`] from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialized.
pub fn load_config(path: &Path) -> Result<CliConfig> {
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Like [`load_config`], but a missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or deserialized.
pub fn load_or_default(path: &Path) -> Result<CliConfig> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(toml::from_str(&raw)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(CliConfig::default()),
        Err(e) => Err(e.into()),
    }
}
