//! Configuration module for gcibatch
//!
//! Stores the Dolphin user directory and the default backup count.
//! Configuration is stored in the user's config directory
//! (`~/.config/gcibatch/config.toml` on Linux).

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const fn default_max_backup() -> u32 {
    1
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GcibatchConfig {
    /// Dolphin user directory containing `GC/`
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Maximum circular backup count handed to the action
    #[serde(default = "default_max_backup")]
    pub max_backup: u32,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for GcibatchConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            max_backup: default_max_backup(),
            quiet: false,
        }
    }
}

impl GcibatchConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("gcibatch").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing a default file there if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created, or
    /// if it holds an invalid `max_backup`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        validate_max_backup(config.max_backup)?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set the maximum backup count
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `max_backup` is zero.
    pub fn set_max_backup(&mut self, max_backup: u32) -> Result<(), ConfigError> {
        validate_max_backup(max_backup)?;
        self.max_backup = max_backup;
        Ok(())
    }

    /// Base directory to walk: `override_dir`, then the configured one, then
    /// the platform default Dolphin user directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no directory is configured and the platform
    /// default cannot be determined.
    pub fn resolve_base_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = override_dir.or(self.base_dir.as_deref()) {
            return Ok(dir.to_path_buf());
        }
        default_dolphin_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine Dolphin user directory".to_string())
        })
    }
}

/// Check a backup count supplied by the user
///
/// # Errors
///
/// Returns `ConfigError` if `max_backup` is zero.
pub fn validate_max_backup(max_backup: u32) -> Result<(), ConfigError> {
    if max_backup == 0 {
        return Err(ConfigError::Message("max_backup must be at least 1".to_string()));
    }
    Ok(())
}

/// Default Dolphin user directory for this platform
#[must_use]
pub fn default_dolphin_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        dirs::document_dir().map(|d| d.join("Dolphin Emulator"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir().map(|d| d.join("Dolphin"))
    } else {
        dirs::data_dir().map(|d| d.join("dolphin-emu"))
    }
}
