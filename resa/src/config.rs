//! Configuration resolution.
//!
//! Configuration is deliberately small: where the state files live, and
//! what capacity a brand-new pool starts with. Values are resolved from,
//! in priority order: explicit builder overrides, the `RESA_DATA_DIR` /
//! `RESA_DEFAULT_CAPACITY` environment variables, a `resa.yaml` file in
//! the data directory, then built-in defaults.
//!
//! The route graph is not configurable; it is fixed at startup.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::{default_data_dir, DEFAULT_CAPACITY};

/// Name of the optional configuration file inside the data directory.
const CONFIG_FILE: &str = "resa.yaml";

/// On-disk configuration schema.
///
/// All fields are optional; absent fields fall through to the next
/// resolution source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory holding the persisted pool state.
    pub data_dir: Option<PathBuf>,

    /// Capacity used when no persisted metadata exists yet.
    pub default_capacity: Option<u32>,
}

/// Fully resolved configuration.
///
/// # Examples
///
/// ```
/// use resa::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .data_dir("/tmp/resa-data")
///     .default_capacity(8)
///     .build()
///     .unwrap();
/// assert_eq!(config.default_capacity, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the persisted pool state.
    pub data_dir: PathBuf,

    /// Capacity used when no persisted metadata exists yet.
    pub default_capacity: u32,
}

impl Config {
    /// Resolves configuration with no overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, the
    /// configuration file is unreadable or malformed, or an environment
    /// variable carries an unparseable value.
    pub fn load() -> Result<Self> {
        ConfigBuilder::new().build()
    }

    /// Returns the storage configuration for the resolved data directory.
    #[must_use]
    pub fn storage_config(&self) -> crate::storage::StorageConfig {
        crate::storage::StorageConfig::new(&self.data_dir)
    }
}

/// Builder for [`Config`] with explicit overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    default_capacity: Option<u32>,
}

impl ConfigBuilder {
    /// Creates a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the data directory.
    #[must_use]
    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Overrides the default capacity for fresh pools.
    #[must_use]
    pub const fn default_capacity(mut self, capacity: u32) -> Self {
        self.default_capacity = Some(capacity);
        self
    }

    /// Resolves the configuration.
    ///
    /// The data directory is resolved first (override, then environment,
    /// then `~/.resa`); the configuration file is then read from that
    /// directory. A `data_dir` entry in the file only takes effect when
    /// neither an override nor the environment chose the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, the
    /// configuration file is unreadable or malformed, or
    /// `RESA_DEFAULT_CAPACITY` carries an unparseable value.
    pub fn build(self) -> Result<Config> {
        let explicit_dir = self
            .data_dir
            .or_else(|| env::var_os("RESA_DATA_DIR").map(PathBuf::from));
        let mut data_dir = match &explicit_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };

        let file = read_config_file(&data_dir)?;
        if explicit_dir.is_none() {
            if let Some(dir) = file.data_dir.clone() {
                data_dir = dir;
            }
        }

        let default_capacity = match self.default_capacity {
            Some(capacity) => capacity,
            None => match env::var("RESA_DEFAULT_CAPACITY") {
                Ok(raw) => raw.parse::<u32>().map_err(|_| Error::Validation {
                    field: "RESA_DEFAULT_CAPACITY".into(),
                    message: format!("not a valid capacity: {raw}"),
                })?,
                Err(_) => file.default_capacity.unwrap_or(DEFAULT_CAPACITY),
            },
        };

        if default_capacity < 1 {
            return Err(Error::Validation {
                field: "default_capacity".into(),
                message: "capacity must be at least 1".into(),
            });
        }

        Ok(Config {
            data_dir,
            default_capacity,
        })
    }
}

/// Reads and parses the configuration file, if present.
fn read_config_file(data_dir: &std::path::Path) -> Result<ConfigFile> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let text = fs::read_to_string(&path)?;
    Ok(serde_yaml::from_str(&text)?)
}
