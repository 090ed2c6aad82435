//! Configuration loading and database location resolution

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Deployment environment, selected once at process startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Detect the running environment.
    ///
    /// `BISTRO_ENV` wins when set (`production` selects production, any
    /// other value selects development). Otherwise the presence of
    /// `WEBSITE_HOSTNAME` selects production; the hosting platform sets
    /// that variable and local machines do not.
    pub fn detect() -> Self {
        match std::env::var("BISTRO_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            Ok(_) => Environment::Development,
            Err(_) => {
                if std::env::var_os("WEBSITE_HOSTNAME").is_some() {
                    Environment::Production
                } else {
                    Environment::Development
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Optional on-disk configuration (`config.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Database file path
    pub database: Option<PathBuf>,
}

/// Database path resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `BISTRO_DATABASE` environment variable
/// 3. TOML config file
/// 4. Per-environment compiled default (fallback)
pub fn resolve_database_path(cli_arg: Option<&Path>, env: Environment) -> Result<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Ok(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var("BISTRO_DATABASE") {
        return Ok(PathBuf::from(path));
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = find_config_file() {
        if let Ok(config) = load_toml_config(&config_path) {
            if let Some(database) = config.database {
                info!("Database path from config file: {}", config_path.display());
                return Ok(database);
            }
        }
    }

    // Priority 4: Per-environment compiled default
    Ok(default_database_path(env))
}

/// Parse a `config.toml` file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

/// Locate the configuration file for the platform
fn find_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/bistro/config.toml first, then /etc/bistro/config.toml
        if let Some(path) = dirs::config_dir().map(|d| d.join("bistro").join("config.toml")) {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/bistro/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("bistro").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}

/// Default database location per environment
///
/// Development keeps the database next to the process working directory.
/// Production stores it under the platform data directory.
fn default_database_path(env: Environment) -> PathBuf {
    match env {
        Environment::Development => PathBuf::from("bistro.db"),
        Environment::Production => dirs::data_local_dir()
            .map(|d| d.join("bistro").join("bistro.db"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/bistro/bistro.db")),
    }
}
