//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `QIWI_TOKEN` is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `QIWI_TOKEN`: Access token (required)
//! - `QIWI_API_BASE_URL`: API origin
//! - `QIWI_DETECT_URL`: Mobile carrier detection endpoint
//! - `QIWI_TIMEOUT_SECS`: Transport timeout in seconds
//! - `QIWI_USER_AGENT`: `User-Agent` header value
//!
//! ## File Locations
//! The loader probes `qiwi.{json,toml}` then `config.{json,toml}` in:
//! 1. The current working directory
//! 2. Its parent and grandparent directories
//! 3. The directory of the executable

use std::path::{Path, PathBuf};

use qiwi_domain::{QiwiClientConfig, QiwiConfig, QiwiError, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["qiwi.json", "qiwi.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the token is not
/// set there, falls back to loading from a config file.
///
/// # Errors
/// Returns `QiwiError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<QiwiConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `QIWI_TOKEN` is required; unset endpoint and transport variables
/// keep their defaults.
///
/// # Errors
/// Returns `QiwiError::Config` if the token is missing or the timeout is
/// not a number.
pub fn load_from_env() -> Result<QiwiConfig> {
    let token = env_var("QIWI_TOKEN")?;
    let defaults = QiwiClientConfig::default();

    let timeout_secs = match std::env::var("QIWI_TIMEOUT_SECS").ok() {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| QiwiError::Config(format!("Invalid timeout: {}", e)))?,
        None => defaults.timeout_secs,
    };

    Ok(QiwiConfig {
        token: Some(token),
        client: QiwiClientConfig {
            api_base_url: std::env::var("QIWI_API_BASE_URL").unwrap_or(defaults.api_base_url),
            detect_url: std::env::var("QIWI_DETECT_URL").unwrap_or(defaults.detect_url),
            timeout_secs,
            user_agent: std::env::var("QIWI_USER_AGENT").ok().or(defaults.user_agent),
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. The token may be
/// absent from the file; it can still be supplied to the client builder.
///
/// # Errors
/// Returns `QiwiError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<QiwiConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(QiwiError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            QiwiError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| QiwiError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration, picking the format from the file extension.
fn parse_config(contents: &str, path: &Path) -> Result<QiwiConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| QiwiError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| QiwiError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(QiwiError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    candidates(&dirs).into_iter().find(|path| path.exists())
}

fn candidates(dirs: &[PathBuf]) -> Vec<PathBuf> {
    dirs.iter().flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name))).collect()
}

/// Get required environment variable
///
/// # Errors
/// Returns `QiwiError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| QiwiError::Config(format!("Missing required environment variable: {}", key)))
}
