//! Configuration file support
//!
//! Settings are read from `roster.toml` in the current directory unless
//! another path is given. Every key is optional:
//!
//! ```toml
//! output = "StudentList.txt"
//! strict = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::writer::DEFAULT_OUTPUT;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

/// Tool settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Where the sorted list is saved
    pub output: PathBuf,
    /// Treat a failed save as a fatal error (non-zero exit)
    pub strict: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            strict: false,
        }
    }
}

impl RosterConfig {
    /// Parse settings from TOML text; `origin` names the source in errors
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| RosterError::Config {
            path: origin.display().to_string(),
            source,
        })
    }

    /// Load settings from `path`, which must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content, path)
    }

    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
