//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "animatic",
    version,
    about = "Assemble video shots into an animatic timeline",
    long_about = "Builds an ordered list of shots with trim points and notes, saves it as a \
                  *.animatic.json project, and exports the timeline by concatenating the \
                  shot media with ffmpeg."
)]
pub struct Cli {
    /// Project file (*.animatic.json)
    #[arg(short, long)]
    pub project: PathBuf,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an empty project file
    New {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Append shots to the end of the timeline
    Add {
        /// Media files, added in the order given
        #[arg(required = true)]
        media: Vec<String>,

        /// In point in seconds (default from settings)
        #[arg(long, allow_negative_numbers = true)]
        trim_in: Option<f64>,

        /// Out point in seconds (default from settings)
        #[arg(long, allow_negative_numbers = true)]
        trim_out: Option<f64>,
    },

    /// Point a shot at different media
    Replace {
        /// Timeline position (0-based)
        index: usize,

        /// New media file
        media: String,

        /// Known length of the new media in seconds
        #[arg(long, conflicts_with = "probe")]
        media_length: Option<f64>,

        /// Ask ffprobe for the length of the new media
        #[arg(long)]
        probe: bool,
    },

    /// Move a shot to another timeline position
    Move {
        /// Current position (0-based)
        from: usize,
        /// New position (0-based)
        to: usize,
    },

    /// Remove a shot from the timeline
    Remove {
        /// Timeline position (0-based)
        index: usize,
    },

    /// Edit a shot's name, trim points or comment
    Edit {
        /// Timeline position (0-based)
        index: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        trim_in: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        trim_out: Option<f64>,

        #[arg(long)]
        comment: Option<String>,
    },

    /// Print the timeline
    List,

    /// Show the timecode and shot at a playhead position
    Scrub {
        /// Playhead position in seconds
        seconds: f64,
    },

    /// Concatenate every shot's media into one file with ffmpeg
    Export {
        /// Output video file
        output: PathBuf,

        /// Where to write the concat list (default from settings)
        #[arg(long)]
        concat_list: Option<PathBuf>,
    },
}
