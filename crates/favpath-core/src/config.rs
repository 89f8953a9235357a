//! Configuration for favpath (stored in ~/.config/favpath/config.toml)
//!
//! Every field has a default, so a missing file and an empty file behave
//! the same.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{FavpathError, Result};
use crate::graph::{Direction, WeightPreference};

const CONFIG_DIR: &str = "favpath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "FAVPATH_CONFIG_DIR";

/// Output formats a config file may name as the default
pub const OUTPUT_FORMATS: &[&str] = &["human", "json", "records"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Preference used by `path` when `--prefer` is not given
    #[serde(default)]
    pub default_preference: WeightPreference,

    /// Output format used when `--format` is not given
    #[serde(default = "default_format")]
    pub default_format: String,

    #[serde(default)]
    pub graph: GraphDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDefaults {
    /// Direction used by `edges` when `--direction` is not given
    #[serde(default)]
    pub default_direction: Direction,
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_preference: WeightPreference::default(),
            default_format: default_format(),
            graph: GraphDefaults::default(),
        }
    }
}

impl Config {
    /// Default config location, honoring `FAVPATH_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    FavpathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from an explicit path, or the default location when `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FavpathError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            FavpathError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| FavpathError::io_operation("create directory", dir.display(), e))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| FavpathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| FavpathError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !OUTPUT_FORMATS.contains(&self.default_format.as_str()) {
            bail_invalid!("default_format", &self.default_format);
        }
        Ok(())
    }
}
