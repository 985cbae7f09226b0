//! Application state: the open project and placeholder playback state.
//!
//! Owned by the top-level process and passed explicitly to whatever drives
//! it. Playback is UI state only; nothing is decoded or rendered.

use animatic_core::{AnimaticError, Result};
use animatic_timeline::Project;
use std::path::{Path, PathBuf};
use tracing::info;

/// Play flag and playhead position in whole seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Playback {
    pub playing: bool,
    pub current_time: u64,
}

/// The current project, where it lives on disk, and playback state.
#[derive(Debug, Default)]
pub struct Session {
    pub project: Project,
    path: Option<PathBuf>,
    playback: Playback,
}

impl Session {
    /// A session with an empty, unsaved project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a project file into a fresh session.
    pub fn open(path: &Path) -> Result<Self> {
        let mut session = Self::new();
        session.load(path)?;
        Ok(session)
    }

    /// Replace the current project with the one at `path`. On failure the
    /// session is left exactly as it was.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let project = Project::load(path)?;
        self.project = project;
        self.path = Some(path.to_path_buf());
        self.playback = Playback::default();
        Ok(())
    }

    /// File backing this session, if it has been saved or opened.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Save to the current path.
    pub fn save(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or_else(|| {
            AnimaticError::InvalidParameter("Project has not been saved yet".into())
        })?;
        self.project.save(path)
    }

    /// Save to a new path, which becomes the current one.
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        self.project.save(path)?;
        self.path = Some(path.to_path_buf());
        info!(path = %path.display(), "Project path set");
        Ok(())
    }

    /// Playback state.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Flip the play flag. Returns the new value.
    pub fn toggle_play(&mut self) -> bool {
        self.playback.playing = !self.playback.playing;
        self.playback.playing
    }

    /// Move the playhead. Fractions are truncated; negatives clamp to zero.
    pub fn scrub(&mut self, seconds: f64) {
        self.playback.current_time = if seconds.is_finite() && seconds > 0.0 {
            seconds as u64
        } else {
            0
        };
    }

    /// Playhead as `HH:MM:SS`.
    pub fn timecode(&self) -> String {
        format_timecode(self.playback.current_time)
    }
}

/// Format whole seconds as `HH:MM:SS`. Hours are not wrapped.
pub fn format_timecode(seconds: u64) -> String {
    let (m, s) = (seconds / 60, seconds % 60);
    let (h, m) = (m / 60, m % 60);
    format!("{h:02}:{m:02}:{s:02}")
}
