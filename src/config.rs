//! Application configuration.

use crate::consts::cli_consts::DEFAULT_FETCH_DELAY_MS;
use crate::router::DEFAULT_PATH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "SOLICITE_ADMIN_CONFIG";

const APP_DIR: &str = ".solicite-admin";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "admin.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Start in dark mode.
    pub dark_mode: bool,
    pub sidebar_open: bool,
    /// Path the shell opens on.
    pub start_path: String,
    /// Simulated latency of the mock dashboard source.
    pub fetch_delay_ms: u64,
    pub with_background_color: bool,
    /// Log file; defaults to `~/.solicite-admin/admin.log`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: true,
            start_path: DEFAULT_PATH.to_string(),
            fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
            with_background_color: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Like `load_from_file`, but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// The log file to write to, falling back to the app directory.
    pub fn log_file_path(&self) -> Result<PathBuf, std::io::Error> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(app_dir()?.join(LOG_FILE)),
        }
    }
}

/// `~/.solicite-admin`
pub fn app_dir() -> Result<PathBuf, std::io::Error> {
    home::home_dir()
        .map(|home| home.join(APP_DIR))
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine the home directory",
            )
        })
}

/// Resolves the config path: explicit flag, then `SOLICITE_ADMIN_CONFIG`,
/// then `~/.solicite-admin/config.json`.
pub fn get_config_path(explicit: Option<&Path>) -> Result<PathBuf, std::io::Error> {
    let from_env = env::var(CONFIG_ENV_VAR).ok();
    config_path_from(explicit, from_env.as_deref())
}

fn config_path_from(
    explicit: Option<&Path>,
    from_env: Option<&str>,
) -> Result<PathBuf, std::io::Error> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match from_env.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Ok(app_dir()?.join(CONFIG_FILE)),
    }
}
