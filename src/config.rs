//! Playlist configuration
//!
//! Header settings applied to a playlist at construction time, loadable
//! from TOML files or JSON documents.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Playlist header settings
///
/// Each field overrides its documented default. Unrecognized keys in a
/// configuration document are rejected, not ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaylistConfig {
    /// EXT-X-VERSION compatibility version
    pub version: u32,

    /// EXT-X-MEDIA-SEQUENCE number of the first segment
    pub sequence: u64,

    /// EXT-X-ALLOW-CACHE: whether players may cache downloaded segments
    pub cache: bool,

    /// EXT-X-TARGETDURATION upper bound in whole seconds
    pub target: u32,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            version: 3,
            sequence: 0,
            cache: true,
            target: 10,
        }
    }
}

impl PlaylistConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Parse configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}
