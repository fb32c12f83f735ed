// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and validation.
//!
//! The artifact is TOML by default; a `.json` path gets the same structure
//! in JSON. Any artifact that fails to parse or validate aborts the run,
//! and a missing artifact quietly falls back to the built-in defaults.

use crate::error::{ConfigError, Result, VetError};
use std::path::{Path, PathBuf};

use super::schema::Config;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "commitvet.toml",
    ".commitvet.toml",
    ".config/commitvet.toml",
    "commitvet.json",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let vet_config = config_dir.join("commitvet").join("config.toml");
        if vet_config.exists() {
            return Some(vet_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<Config> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<Config> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(VetError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        VetError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    if path.extension().is_some_and(|ext| ext == "json") {
        parse_config_json(&content)
    } else {
        parse_config(&content)
    }
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| {
        VetError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse configuration from a JSON string.
pub fn parse_config_json(content: &str) -> Result<Config> {
    let config: Config = serde_json::from_str(content).map_err(|e| {
        VetError::Config(ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
        })
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Reject artifacts that parse but cannot be evaluated.
///
/// The only structurally required value is the length limit: an enabled
/// `header-max-length` without one has no defined meaning. Enum rules
/// with a missing or empty list simply pass, so they need no check here.
fn validate_config(config: &Config) -> Result<()> {
    let rule = &config.rules.header_max_length;
    if !rule.is_off() && rule.param.is_none() {
        return Err(VetError::Config(ConfigError::InvalidValue {
            key: "header-max-length".to_string(),
            message: "a length limit is required when the rule is enabled".to_string(),
        }));
    }
    Ok(())
}
