//! Animatic Timeline - Shot list data model
//!
//! Implements the ordered timeline an animatic is assembled from:
//! - Shots with stable ids, trim bounds and free-text notes
//! - A project owning the shots in timeline order
//! - Reordering, media replacement and metadata edits
//! - JSON persistence compatible with existing `*.animatic.json` files

pub mod project;
pub mod serialization;
pub mod shot;

pub use project::Project;
pub use shot::{Shot, ShotMetadata};
