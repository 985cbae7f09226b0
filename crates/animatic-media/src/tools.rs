//! External tool lookup.

use animatic_core::{AnimaticError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve an external binary.
///
/// A configured path wins; otherwise `name` is searched on `PATH`. The result
/// is an existing executable or `NotFound`.
pub fn locate_tool(configured: Option<&Path>, name: &str) -> Result<PathBuf> {
    let found = match configured {
        Some(path) => which::which(path),
        None => which::which(name),
    };

    match found {
        Ok(path) => {
            debug!(tool = name, path = %path.display(), "Located tool");
            Ok(path)
        }
        Err(e) => {
            let wanted = configured
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| name.to_string());
            Err(AnimaticError::NotFound(format!(
                "{} not found ({}): install {} to continue",
                wanted, e, name
            )))
        }
    }
}
