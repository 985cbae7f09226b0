//! Animatic Core - Foundation types shared by every Animatic Builder crate
//!
//! This crate provides:
//! - The common error type and `Result` alias
//! - Project-wide constants (file extension, id spacing)

pub mod error;

pub use error::{AnimaticError, Result};

/// File extension used for saved projects (`*.animatic.json`).
pub const PROJECT_EXTENSION: &str = "animatic.json";

/// Gap between consecutive shot ids. Also the id given to the first shot.
pub const SHOT_ID_STEP: i64 = 10;
