use std::{num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};

use crate::domain::catalog::DEFAULT_BUCKET_COUNT;

/// Configuration for loading course catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The number of buckets in a loaded catalog.
    ///
    /// The count is fixed once a catalog is built. Small catalogs (tens to
    /// low hundreds of courses) stay well spread with the default of 100.
    bucket_count: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket_count: default_bucket_count(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the number of catalog buckets.
    #[must_use]
    pub const fn bucket_count(&self) -> NonZeroUsize {
        self.bucket_count
    }

    /// Sets the number of catalog buckets.
    pub const fn set_bucket_count(&mut self, bucket_count: NonZeroUsize) {
        self.bucket_count = bucket_count;
    }
}

const fn default_bucket_count() -> NonZeroUsize {
    DEFAULT_BUCKET_COUNT
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_bucket_count")]
        bucket_count: NonZeroUsize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { bucket_count } => Self { bucket_count },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            bucket_count: config.bucket_count,
        }
    }
}
