//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory (or
//! the file named by `ROSTER_CONFIG`), then applies `ROSTER_DATA_FILE` and
//! `ROSTER_LOG_LEVEL` env overrides.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::AppError;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Fully-resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Roster JSON file (already expanded, no `~`).
    pub data_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: expand_home(&default_data_file()),
            log_level: default_log_level(),
        }
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    roster: RawRoster,
}

#[derive(Deserialize)]
struct RawRoster {
    #[serde(default = "default_data_file")]
    data_file: String,
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for RawRoster {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}

fn default_data_file() -> String {
    "~/.roster/students.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load config from `ROSTER_CONFIG` or `config/default.toml`, then apply
/// env-var overrides. A missing default file means built-in defaults.
pub fn load() -> Result<Config, AppError> {
    let data_file_override = env::var("ROSTER_DATA_FILE").ok();
    let log_level_override = env::var("ROSTER_LOG_LEVEL").ok();

    if let Ok(explicit) = env::var("ROSTER_CONFIG") {
        return load_from(
            Path::new(&explicit),
            data_file_override.as_deref(),
            log_level_override.as_deref(),
        );
    }

    let path = Path::new(DEFAULT_CONFIG_PATH);
    if path.exists() {
        load_from(path, data_file_override.as_deref(), log_level_override.as_deref())
    } else {
        Ok(resolve(
            RawConfig::default(),
            data_file_override.as_deref(),
            log_level_override.as_deref(),
        ))
    }
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    data_file_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    Ok(resolve(parsed, data_file_override, log_level_override))
}

fn resolve(
    parsed: RawConfig,
    data_file_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Config {
    let r = parsed.roster;
    Config {
        data_file: expand_home(data_file_override.unwrap_or(&r.data_file)),
        log_level: log_level_override.unwrap_or(&r.log_level).to_string(),
    }
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
