//! Decoder configuration.

use serde::{Deserialize, Serialize};
#[cfg(feature = "toml")]
use std::path::Path;

#[cfg(feature = "toml")]
use crate::error::{ModelError, Result};

/// Policy applied by [`crate::deserialize_model`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Stringify numbers and booleans found in string fields
    pub coerce_scalars: bool,
    /// Fail on keys the model does not declare
    pub reject_unknown_keys: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            coerce_scalars: true,
            reject_unknown_keys: false,
        }
    }
}

#[cfg(feature = "toml")]
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    decode: DecodeConfig,
}

impl DecodeConfig {
    /// No coercion, unknown keys rejected.
    pub fn strict() -> Self {
        Self {
            coerce_scalars: false,
            reject_unknown_keys: true,
        }
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ModelError::Config(e.to_string()))?;
        Ok(file.decode)
    }

    /// Load the `[decode]` table of a TOML file.
    #[cfg(feature = "toml")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ModelError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}
