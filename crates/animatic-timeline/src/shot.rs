//! Shot types for the timeline.

use animatic_core::{AnimaticError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default out point (seconds) for a freshly added shot.
pub const DEFAULT_TRIM_OUT: f64 = 10.0;

fn default_trim_out() -> f64 {
    DEFAULT_TRIM_OUT
}

/// JSON has no NaN or infinity, so a trim point must be finite to be saved.
pub(crate) fn check_trim(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnimaticError::InvalidParameter(format!(
            "{field} must be a finite number of seconds, got {value}"
        )))
    }
}

/// One entry on the timeline.
///
/// The id is fixed at creation; everything else is editable in place through
/// [`Project::shot_mut`](crate::Project::shot_mut). Field order here is the
/// field order written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    /// Stable identity, never reused within a project
    #[serde(rename = "shot_id")]
    id: i64,
    /// Display name (`shot_010` unless renamed)
    pub name: String,
    /// Path or URI of the source media
    #[serde(rename = "file_path")]
    pub media_reference: String,
    /// Start offset into the media, seconds
    #[serde(default)]
    pub trim_in: f64,
    /// End offset into the media, seconds
    #[serde(default = "default_trim_out")]
    pub trim_out: f64,
    /// Free-text note
    #[serde(default)]
    pub comment: String,
}

impl Shot {
    /// Create a shot with the generated `shot_NNN` name.
    pub(crate) fn new(id: i64, media_reference: impl Into<String>, trim_in: f64, trim_out: f64) -> Self {
        Self {
            id,
            name: Self::default_name(id),
            media_reference: media_reference.into(),
            trim_in,
            trim_out,
            comment: String::new(),
        }
    }

    /// Generated name for an id, zero-padded to at least three digits.
    pub fn default_name(id: i64) -> String {
        format!("shot_{id:03}")
    }

    /// The shot's id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Usable length in seconds. Never negative, even when `trim_out < trim_in`.
    pub fn duration(&self) -> f64 {
        (self.trim_out - self.trim_in).max(0.0)
    }

    /// File name component of the media reference, or the whole reference
    /// when it has none (e.g. a bare URI).
    pub fn media_file_name(&self) -> String {
        Path::new(&self.media_reference)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.media_reference.clone())
    }

    /// One-line label for list views: `shot_010 | a.mp4 | 10.00s`.
    pub fn label(&self) -> String {
        format!(
            "{} | {} | {:.2}s",
            self.name,
            self.media_file_name(),
            self.duration()
        )
    }

    /// Check that both trim points are finite.
    pub(crate) fn check_trims(&self) -> Result<()> {
        check_trim("trim_in", self.trim_in)?;
        check_trim("trim_out", self.trim_out)
    }

    /// Apply a metadata edit in place.
    ///
    /// A name that is blank after trimming keeps the current name. Finite trim
    /// values are taken as given, even when `trim_out < trim_in`; NaN or
    /// infinity rejects the whole edit. The comment is whitespace-trimmed.
    pub fn apply_metadata(&mut self, edit: ShotMetadata) -> Result<()> {
        if let Some(trim_in) = edit.trim_in {
            check_trim("trim_in", trim_in)?;
        }
        if let Some(trim_out) = edit.trim_out {
            check_trim("trim_out", trim_out)?;
        }

        if let Some(name) = edit.name {
            let name = name.trim();
            if !name.is_empty() {
                self.name = name.to_string();
            }
        }
        if let Some(trim_in) = edit.trim_in {
            self.trim_in = trim_in;
        }
        if let Some(trim_out) = edit.trim_out {
            self.trim_out = trim_out;
        }
        if let Some(comment) = edit.comment {
            self.comment = comment.trim().to_string();
        }
        Ok(())
    }
}

/// A partial edit of a shot's user-facing fields. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotMetadata {
    pub name: Option<String>,
    pub trim_in: Option<f64>,
    pub trim_out: Option<f64>,
    pub comment: Option<String>,
}

impl ShotMetadata {
    /// Whether applying this edit would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.trim_in.is_none()
            && self.trim_out.is_none()
            && self.comment.is_none()
    }
}
