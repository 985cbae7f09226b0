//! Application settings, persisted as JSON in the user config directory.

use animatic_core::{AnimaticError, Result};
use animatic_media::export::DEFAULT_CONCAT_LIST;
use animatic_timeline::shot::DEFAULT_TRIM_OUT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// User settings. Every field has a default, so partial files are fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// ffmpeg binary (None = search PATH)
    pub ffmpeg_path: Option<PathBuf>,
    /// ffprobe binary (None = search PATH)
    pub ffprobe_path: Option<PathBuf>,
    /// Where export writes its concat list
    pub concat_list_path: PathBuf,
    /// In point given to newly added shots
    pub default_trim_in: f64,
    /// Out point given to newly added shots
    pub default_trim_out: f64,
    /// Probe replacement media for its length when none is given
    pub probe_on_replace: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: None,
            ffprobe_path: None,
            concat_list_path: PathBuf::from(DEFAULT_CONCAT_LIST),
            default_trim_in: 0.0,
            default_trim_out: DEFAULT_TRIM_OUT,
            probe_on_replace: false,
        }
    }
}

impl AppConfig {
    /// Default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("animatic-builder")
            .join("config.json")
    }

    /// Load settings. A missing file yields the defaults; a malformed one is
    /// an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| {
            AnimaticError::Serialization(format!(
                "Failed to parse config {}: {e}",
                path.display()
            ))
        })
    }

    /// Write settings, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            AnimaticError::Serialization(format!("Failed to serialize config: {e}"))
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }
}
