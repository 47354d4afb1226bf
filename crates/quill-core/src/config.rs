//! Editor configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Configuration for an editing session
///
/// Stored as JSON. Every field has a default, so a partial file (or `{}`)
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Schema version
    pub version: u32,

    /// Undo/redo history settings
    pub history: HistoryConfig,

    /// Preview panel settings
    pub preview: PreviewConfig,
}

impl EditorConfig {
    /// Current schema version
    pub const CURRENT_VERSION: u32 = 1;

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EditorConfig = serde_json::from_str(json)?;
        if config.version > Self::CURRENT_VERSION {
            return Err(CoreError::Config(format!(
                "unsupported config version {} (newest supported is {})",
                config.version,
                Self::CURRENT_VERSION
            )));
        }
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            history: HistoryConfig::default(),
            preview: PreviewConfig::default(),
        }
    }
}

/// Undo/redo history settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of snapshots to keep (None = unbounded)
    ///
    /// When the limit is hit the oldest snapshots are evicted.
    pub limit: Option<usize>,
}

/// Preview panel settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Start new sessions with the preview showing
    pub enabled_on_start: bool,
}
