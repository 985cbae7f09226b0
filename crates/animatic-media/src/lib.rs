//! Animatic Media - FFmpeg integration for export and probing
//!
//! This crate handles:
//! - Building the ffmpeg concat list for a timeline
//! - Running the concat export
//! - Probing media duration with ffprobe
//! - Locating the external tools

pub mod export;
pub mod probe;
pub mod tools;

pub use export::{ConcatList, ExportJob};
pub use probe::MediaProbe;
pub use tools::locate_tool;
