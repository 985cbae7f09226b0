//! Project persistence.
//!
//! The document is a JSON object with a single `shots` array:
//!
//! ```text
//! { "shots": [ { "shot_id": 10, "name": "shot_010", "file_path": "a.mp4",
//!                "trim_in": 0.0, "trim_out": 10.0, "comment": "" } ] }
//! ```
//!
//! Files are written pretty-printed with two-space indentation. On load a
//! missing or `null` `shots` field means an empty project and unknown fields
//! are ignored. A document either loads completely or not at all.

use animatic_core::{AnimaticError, Result};
use std::path::Path;
use tracing::info;

use crate::project::Project;

impl Project {
    /// Serialize to pretty-printed JSON bytes. Fails on a NaN or infinite
    /// trim point, which `serde_json` would write as `null`.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        self.validate_trims()?;
        serde_json::to_vec_pretty(self)
            .map_err(|e| AnimaticError::Serialization(format!("Failed to serialize project: {}", e)))
    }

    /// Deserialize from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let project: Project = serde_json::from_slice(data)
            .map_err(|e| AnimaticError::Serialization(format!("Failed to parse project: {}", e)))?;
        project.validate_ids()?;
        Ok(project)
    }

    /// Save the project to a file path. The document is fully built before
    /// anything is written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = self.to_json()?;
        std::fs::write(path, data)?;
        info!(path = %path.display(), shots = self.len(), "Saved project");
        Ok(())
    }

    /// Load a project from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let project = Self::from_json(&data)?;
        info!(path = %path.display(), shots = project.len(), "Loaded project");
        Ok(project)
    }
}
