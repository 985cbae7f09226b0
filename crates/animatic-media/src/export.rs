//! Export pipeline: concatenates every shot's media into one file.
//!
//! Uses the ffmpeg concat demuxer with stream copy. Shots are joined whole;
//! trim points are not applied.

use animatic_core::{AnimaticError, Result};
use animatic_timeline::Project;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

use crate::tools::locate_tool;

/// Default location of the generated concat list.
pub const DEFAULT_CONCAT_LIST: &str = "timeline_concat.txt";

// ── Concat list ─────────────────────────────────────────────────

/// Input list for the ffmpeg concat demuxer, in timeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatList {
    /// Absolute media paths
    pub entries: Vec<PathBuf>,
}

impl ConcatList {
    /// Collect the media of every shot, made absolute against the current
    /// directory. Paths are not checked for existence.
    pub fn from_project(project: &Project) -> Result<Self> {
        let entries = project
            .shots()
            .iter()
            .map(|shot| std::path::absolute(&shot.media_reference))
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Render as `file '<path>'` lines joined by newlines.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|path| format!("file '{}'", escape_quotes(&path.to_string_lossy())))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the rendered list as UTF-8.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())?;
        debug!(path = %path.display(), entries = self.entries.len(), "Wrote concat list");
        Ok(())
    }
}

/// Quote escaping for the concat demuxer: `'` becomes `'\''`.
fn escape_quotes(path: &str) -> String {
    path.replace('\'', r"'\''")
}

// ── Export job ──────────────────────────────────────────────────

/// An export job configuration.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Output file path.
    pub output_path: PathBuf,
    /// Where the concat list is written.
    pub concat_list_path: PathBuf,
    /// Explicit ffmpeg binary (None = search PATH).
    pub ffmpeg: Option<PathBuf>,
}

impl ExportJob {
    /// Create a new export job using the default concat list location.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            concat_list_path: PathBuf::from(DEFAULT_CONCAT_LIST),
            ffmpeg: None,
        }
    }

    /// Set where the concat list is written.
    pub fn with_concat_list(mut self, path: impl Into<PathBuf>) -> Self {
        self.concat_list_path = path.into();
        self
    }

    /// Use a specific ffmpeg binary.
    pub fn with_ffmpeg(mut self, path: Option<PathBuf>) -> Self {
        self.ffmpeg = path;
        self
    }

    /// Build the FFmpeg command arguments.
    pub fn ffmpeg_args(&self) -> Vec<String> {
        vec![
            "-y".into(),
            "-f".into(),
            "concat".into(),
            "-safe".into(),
            "0".into(),
            "-i".into(),
            self.concat_list_path.to_string_lossy().into_owned(),
            "-c".into(),
            "copy".into(),
            self.output_path.to_string_lossy().into_owned(),
        ]
    }

    /// Run the export. Blocks until ffmpeg exits.
    pub fn run(&self, project: &Project) -> Result<()> {
        if project.is_empty() {
            return Err(AnimaticError::InvalidParameter(
                "Add shots before exporting".into(),
            ));
        }

        let ffmpeg = locate_tool(self.ffmpeg.as_deref(), "ffmpeg")?;

        ConcatList::from_project(project)?.write_to(&self.concat_list_path)?;

        let args = self.ffmpeg_args();
        info!(
            output = %self.output_path.display(),
            shots = project.len(),
            "Exporting timeline"
        );

        let status = Command::new(&ffmpeg)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AnimaticError::Encoder(format!("Failed to spawn ffmpeg: {e}")))?;

        if !status.success() {
            return Err(AnimaticError::Encoder(format!(
                "ffmpeg exited with status: {}. Ensure media codecs are compatible.",
                status
            )));
        }

        info!(output = %self.output_path.display(), "Export finished");
        Ok(())
    }
}
