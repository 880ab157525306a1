//! Configuration file management.
//!
//! Handles reading and validating `.elasticloud.toml`. The file is optional:
//! every value it holds can also come from the command line or the
//! environment, which take precedence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings stored in `.elasticloud.toml`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Deployment and credential descriptors
    #[serde(default)]
    pub cloud: CloudConfig,
    /// Index request defaults
    #[serde(default)]
    pub index: IndexConfig,
}

/// The `[cloud]` section.
#[derive(Default, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Cloud id, `label:base64payload`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Cloud auth, `username:password`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
}

impl fmt::Debug for CloudConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudConfig")
            .field("id", &self.id)
            .field("auth", &self.auth.as_ref().map(|_| constants::MASKED_PASSWORD))
            .finish()
    }
}

/// The `[index]` section.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Target index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Document type sent with index requests
    #[serde(default = "default_document_type")]
    pub document_type: String,
    /// Client request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Client gzip compression level, 0 to 9
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,
    /// Query parameters added to every index request
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

fn default_document_type() -> String {
    constants::DEFAULT_DOCUMENT_TYPE.to_string()
}

fn default_timeout_secs() -> u64 {
    constants::DEFAULT_TIMEOUT_SECS
}

fn default_compression_level() -> u32 {
    constants::DEFAULT_COMPRESSION_LEVEL
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            name: None,
            document_type: default_document_type(),
            timeout_secs: default_timeout_secs(),
            compression_level: default_compression_level(),
            params: BTreeMap::new(),
        }
    }
}

impl IndexConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero timeout, a compression
    /// level above 9, or an empty index name.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "index.timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if self.compression_level > constants::MAX_COMPRESSION_LEVEL {
            return Err(ConfigError::InvalidValue {
                field: "index.compression_level",
                reason: format!(
                    "{} is above the maximum of {}",
                    self.compression_level,
                    constants::MAX_COMPRESSION_LEVEL
                ),
            }
            .into());
        }

        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "index.name",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if self.document_type.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "index.document_type",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `.elasticloud.toml` in the
    /// current directory is read if present, and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if an explicit path is missing,
    /// `ConfigError::Parse` if the TOML is malformed, or a validation error.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::load(&path)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::ReadFile` if it can't be read, or `ConfigError::Parse`
    /// if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::from_toml(&contents)?;

        debug!(
            has_cloud_id = config.cloud.id.is_some(),
            has_cloud_auth = config.cloud.auth.is_some(),
            params = config.index.params.len(),
            "config loaded"
        );

        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate value ranges.
    ///
    /// # Errors
    ///
    /// See [`IndexConfig::validate`].
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");
        self.index.validate()
    }

    /// Pick the cloud id: the explicit value (argument or environment) wins
    /// over the config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCloudId` if neither is set.
    pub fn cloud_id(&self, explicit: Option<String>) -> Result<String> {
        explicit
            .or_else(|| self.cloud.id.clone())
            .ok_or_else(|| ConfigError::MissingCloudId.into())
    }

    /// Pick the cloud auth: the explicit value wins over the config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCloudAuth` if neither is set.
    pub fn cloud_auth(&self, explicit: Option<String>) -> Result<String> {
        explicit
            .or_else(|| self.cloud.auth.clone())
            .ok_or_else(|| ConfigError::MissingCloudAuth.into())
    }
}
