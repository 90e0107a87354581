use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::resolver::ResolveOptions;

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "resolve-version.toml";

/// Represents the complete configuration for resolve-version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
}

fn default_remote_name() -> String {
    "origin".to_string()
}

fn default_fetch() -> bool {
    true
}

/// Where tags are refreshed from before they are read.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,

    #[serde(default = "default_fetch")]
    pub fetch: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            name: default_remote_name(),
            fetch: default_fetch(),
        }
    }
}

impl Config {
    /// Build resolver options, letting command-line values win.
    pub fn resolve_options(&self, remote: Option<&str>, no_fetch: bool) -> ResolveOptions {
        ResolveOptions {
            remote: remote
                .map(str::to_string)
                .unwrap_or_else(|| self.remote.name.clone()),
            fetch: self.remote.fetch && !no_fetch,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `resolve-version.toml` in current directory
/// 3. `resolve-version.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match discover_config() {
            Some(path) => path,
            None => {
                debug!("no config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    debug!(path = %path.display(), "loading config");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        ResolveError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| ResolveError::config(format!("Cannot parse {}: {}", path.display(), e)))
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
