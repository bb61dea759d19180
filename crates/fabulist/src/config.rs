//! Application configuration.
//!
//! TOML-based configuration with a precedence system:
//! - Bundled defaults (include_str! from fabulist.toml)
//! - User overrides (~/.config/fabulist/fabulist.toml, then ./fabulist.toml)
//!
//! Later sources merge over earlier ones field by field, so a user file only
//! needs the values it changes.

use config::{Config, File, FileFormat};
use fabulist_error::{ConfigError, FabulistResult};
use fabulist_models::OpenAiConfig;
use fabulist_server::HttpConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

fn default_storage_root() -> PathBuf {
    PathBuf::from(".")
}

/// Artifact storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory the texts/, images/, and audios/ subdirectories live under.
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
        }
    }
}

/// Top-level fabulist configuration.
///
/// # Example
///
/// ```no_run
/// use fabulist::FabulistConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Load configuration (bundled defaults + user overrides)
/// let config = FabulistConfig::load()?;
/// println!("Chat model: {}", config.openai.chat_model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FabulistConfig {
    /// OpenAI connection settings
    #[serde(default)]
    pub openai: OpenAiConfig,
    /// Artifact storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Web UI listen settings
    #[serde(default)]
    pub server: HttpConfig,
}

impl FabulistConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> FabulistResult<Self> {
        debug!("Loading configuration from file");

        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?;
        let config = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (fabulist.toml shipped with the binary)
    /// 2. User config in home directory (~/.config/fabulist/fabulist.toml)
    /// 3. User config in current directory (./fabulist.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> FabulistResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../fabulist.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fabulist/fabulist.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("fabulist").required(false));

        let settings = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?;
        let config = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }
}
