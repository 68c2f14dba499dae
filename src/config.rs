//! Backend connection configuration.
//!
//! One [`BackendConfig`] describes the hosted store the board talks to. It
//! can be deserialized from JSON or read from the environment and is passed
//! explicitly to adapter constructors.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Default number of pooled store connections.
pub const DEFAULT_MAX_POOL_SIZE: u32 = 8;

/// Environment variable holding the store connection URL.
pub const DATABASE_URL_VAR: &str = "TASKBOARD_DATABASE_URL";

/// Environment variable overriding the connection pool size.
pub const MAX_POOL_SIZE_VAR: &str = "TASKBOARD_MAX_POOL_SIZE";

/// Errors raised while building a [`BackendConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting is absent or blank.
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// A setting is present but unusable.
    #[error("invalid value for {setting}: {reason}")]
    Invalid {
        /// Setting name.
        setting: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The JSON document could not be parsed.
    #[error("malformed configuration document: {0}")]
    Malformed(String),
}

/// Connection settings for the hosted backend.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBackendConfig")]
pub struct BackendConfig {
    database_url: String,
    max_pool_size: u32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBackendConfig {
    database_url: String,
    #[serde(default = "default_max_pool_size")]
    max_pool_size: u32,
}

const fn default_max_pool_size() -> u32 {
    DEFAULT_MAX_POOL_SIZE
}

impl TryFrom<RawBackendConfig> for BackendConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBackendConfig) -> Result<Self, Self::Error> {
        Self::new(raw.database_url)?.with_max_pool_size(raw.max_pool_size)
    }
}

impl BackendConfig {
    /// Creates a configuration with the default pool size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the URL is blank.
    pub fn new(database_url: impl Into<String>) -> Result<Self, ConfigError> {
        let database_url = database_url.into().trim().to_owned();
        if database_url.is_empty() {
            return Err(ConfigError::Missing(DATABASE_URL_VAR));
        }
        Ok(Self {
            database_url,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
        })
    }

    /// Overrides the pool size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `size` is zero.
    pub fn with_max_pool_size(mut self, size: u32) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::Invalid {
                setting: MAX_POOL_SIZE_VAR,
                reason: "pool size must be positive".to_owned(),
            });
        }
        self.max_pool_size = size;
        Ok(self)
    }

    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// See [`BackendConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the URL is absent and
    /// [`ConfigError::Invalid`] when the pool size is not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup(DATABASE_URL_VAR).ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;
        let config = Self::new(url)?;
        match lookup(MAX_POOL_SIZE_VAR) {
            None => Ok(config),
            Some(raw) => {
                let size = raw.trim().parse::<u32>().map_err(|err| ConfigError::Invalid {
                    setting: MAX_POOL_SIZE_VAR,
                    reason: err.to_string(),
                })?;
                config.with_max_pool_size(size)
            }
        }
    }

    /// Parses a JSON document such as
    /// `{"database_url": "postgres://localhost/tasks", "max_pool_size": 4}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for invalid JSON or any validation
    /// failure.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(document).map_err(|err| ConfigError::Malformed(err.to_string()))
    }

    /// Returns the store connection URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the connection pool size.
    #[must_use]
    pub const fn max_pool_size(&self) -> u32 {
        self.max_pool_size
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("database_url", &"<redacted>")
            .field("max_pool_size", &self.max_pool_size)
            .finish()
    }
}
