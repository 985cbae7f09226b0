//! Media file probing to get metadata without full decode.

use animatic_core::{AnimaticError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::tools::locate_tool;

/// Information about a media file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaProbe {
    /// File path
    pub path: String,
    /// Duration in seconds
    pub duration: f64,
    /// Container format, as ffprobe names it (e.g. `mov,mp4,m4a,3gp,3g2,mj2`)
    pub format: String,
}

/// The subset of `ffprobe -of json` output we read.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    #[serde(default)]
    format_name: Option<String>,
    /// ffprobe prints numbers as strings
    #[serde(default)]
    duration: Option<String>,
}

impl MediaProbe {
    /// Probe a media file with ffprobe. `ffprobe` overrides the PATH lookup.
    pub fn probe<P: AsRef<Path>>(path: P, ffprobe: Option<&Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy().to_string();

        if !path.exists() {
            return Err(AnimaticError::NotFound(format!(
                "File not found: {}",
                path_str
            )));
        }

        let ffprobe = locate_tool(ffprobe, "ffprobe")?;
        let output = Command::new(&ffprobe)
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration,format_name",
                "-of",
                "json",
            ])
            .arg(path)
            .output()
            .map_err(|e| AnimaticError::Probe(format!("Failed to spawn ffprobe: {e}")))?;

        if !output.status.success() {
            return Err(AnimaticError::Probe(format!(
                "ffprobe failed on {}: {}",
                path_str,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let probe = Self::from_ffprobe_json(path_str, &output.stdout)?;
        debug!(path = %probe.path, duration = probe.duration, "Probed media");
        Ok(probe)
    }

    /// Duration of a media file in seconds, suitable as the length hint for
    /// [`Project::replace_media`](animatic_timeline::Project::replace_media).
    pub fn duration_seconds<P: AsRef<Path>>(path: P, ffprobe: Option<&Path>) -> Result<f64> {
        Ok(Self::probe(path, ffprobe)?.duration)
    }

    /// Parse ffprobe's JSON output.
    pub fn from_ffprobe_json(path: impl Into<String>, data: &[u8]) -> Result<Self> {
        let path = path.into();
        let parsed: FfprobeOutput = serde_json::from_slice(data)
            .map_err(|e| AnimaticError::Probe(format!("Invalid ffprobe output: {}", e)))?;

        let duration = parsed
            .format
            .duration
            .as_deref()
            .ok_or_else(|| AnimaticError::Probe(format!("No duration reported for {}", path)))?
            .trim()
            .parse::<f64>()
            .map_err(|e| AnimaticError::Probe(format!("Bad duration for {}: {}", path, e)))?;

        if !duration.is_finite() || duration < 0.0 {
            return Err(AnimaticError::Probe(format!(
                "Bad duration for {}: {}",
                path, duration
            )));
        }

        Ok(Self {
            path,
            duration,
            format: parsed.format.format_name.unwrap_or_default(),
        })
    }
}
