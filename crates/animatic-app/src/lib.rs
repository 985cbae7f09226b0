//! Animatic Builder application layer
//!
//! Drives the shot list model from the command line:
//! - [`cli`] - argument parsing
//! - [`commands`] - one handler per subcommand
//! - [`config`] - user settings
//! - [`session`] - open project and playback state

pub mod cli;
pub mod commands;
pub mod config;
pub mod session;

pub use cli::{Cli, Command};
pub use config::AppConfig;
pub use session::Session;
