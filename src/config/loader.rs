//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV_VAR: &str = "SSHPICK_CONFIG";

/// Environment variable naming the record store to open.
pub const RECORDS_ENV_VAR: &str = "SSHPICK_RECORDS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/sshpick/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Record store to open instead of searching the default locations.
    #[serde(default)]
    pub records_file: Option<PathBuf>,

    /// Exit after the ssh session ends instead of returning to the list.
    #[serde(default)]
    pub quit_after_connect: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Program run with the record's command appended.
    #[serde(default)]
    pub ssh_program: Option<String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Explicit record store, `None` to search the default locations.
    pub records_file: Option<PathBuf>,
    /// Exit after the ssh session ends.
    pub quit_after_connect: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Program used to connect.
    pub ssh_program: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            records_file: None,
            quit_after_connect: true,
            log_file_path: default_log_path(),
            ssh_program: "ssh".to_string(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/sshpick/sshpick.log` on Linux, or the platform
/// state directory elsewhere. Falls back to the current directory when no
/// state directory exists (macOS, Windows).
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("sshpick").join("sshpick.log")
    } else {
        PathBuf::from("sshpick.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/sshpick/config.toml` on Linux.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sshpick").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SSHPICK_CONFIG` environment variable
/// 3. Default path `~/.config/sshpick/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SSHPICK_RECORDS`: Override the record store path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(records) = std::env::var(RECORDS_ENV_VAR) {
        if !records.is_empty() {
            config.records_file = Some(PathBuf::from(records));
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        records_file: config.records_file.or(defaults.records_file),
        quit_after_connect: config
            .quit_after_connect
            .unwrap_or(defaults.quit_after_connect),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        ssh_program: config.ssh_program.unwrap_or(defaults.ssh_program),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `records_override` - Record store from `--records`
/// * `stay` - `--stay` was given: return to the list after each connection
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    records_override: Option<PathBuf>,
    stay: bool,
) -> ResolvedConfig {
    if let Some(records) = records_override {
        config.records_file = Some(records);
    }

    if stay {
        config.quit_after_connect = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
