// src/config/app.rs
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_KEY_ENV};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub transposition: Transposition,
    pub logging: Logging,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Transposition {
    /// Key used when a transposition request carries none
    pub default_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// Fallback tracing filter when RUST_LOG is unset
    pub level: String,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Read and parse a TOML config file, then apply env overrides.
///
/// Sections and fields missing from the file take their built-in defaults.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let mut conf: Config = toml::from_str(&content)?;
    apply_env(&mut conf);
    Ok(conf)
}

/// Config file location: `CLASSIC_CIPHERS_CONFIG`, else `classic-ciphers.toml`
pub fn source_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Global config, loaded once. Never fails: a missing or broken file falls
/// back to the built-in defaults with a warning.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path = source_path();

        if !config_path.exists() {
            warn!("{} not found, using built-in defaults", config_path.display());
            let mut conf = Config::default();
            apply_env(&mut conf);
            return conf;
        }

        match load_from(&config_path) {
            Ok(conf) => {
                debug!(path = %config_path.display(), "loaded config");
                conf
            }
            Err(err) => {
                warn!("ignoring {}: {err}, using built-in defaults", config_path.display());
                let mut conf = Config::default();
                apply_env(&mut conf);
                conf
            }
        }
    })
}

fn apply_env(conf: &mut Config) {
    if let Ok(key) = std::env::var(DEFAULT_KEY_ENV) {
        if !key.is_empty() {
            conf.transposition.default_key = key;
        }
    }
}
