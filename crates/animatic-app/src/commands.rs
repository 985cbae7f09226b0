//! Subcommand handlers. Each one opens the project, applies one action and
//! saves; nothing is written when loading or the action fails.

use anyhow::{bail, Context, Result};
use animatic_media::{ExportJob, MediaProbe};
use animatic_timeline::{Project, ShotMetadata};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::session::{format_timecode, Session};

/// Run one subcommand against the project at `project_path`, writing
/// human-readable output to `out`.
pub fn execute(
    command: Command,
    project_path: &Path,
    config: &AppConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let mut session = match command {
        Command::New { force } => return create_project(project_path, force, out),
        _ => Session::open(project_path)
            .with_context(|| format!("Failed to open {}", project_path.display()))?,
    };

    match command {
        Command::New { .. } => {}

        Command::Add {
            media,
            trim_in,
            trim_out,
        } => {
            let trim_in = trim_in.unwrap_or(config.default_trim_in);
            let trim_out = trim_out.unwrap_or(config.default_trim_out);
            for reference in media {
                let shot = session
                    .project
                    .add_shot_trimmed(reference, trim_in, trim_out)?;
                writeln!(out, "{}", shot.label())?;
            }
            session.save()?;
        }

        Command::Replace {
            index,
            media,
            media_length,
            probe,
        } => {
            let media_length = match media_length {
                Some(length) => Some(length),
                None if probe || config.probe_on_replace => Some(
                    MediaProbe::duration_seconds(&media, config.ffprobe_path.as_deref())
                        .with_context(|| format!("Could not probe {}", media))?,
                ),
                None => None,
            };
            session.project.replace_media(index, media, media_length)?;
            print_shot(out, &session.project, index)?;
            session.save()?;
        }

        Command::Move { from, to } => {
            session.project.move_shot(from, to)?;
            print_shot(out, &session.project, to)?;
            session.save()?;
        }

        Command::Remove { index } => {
            let removed = session.project.remove_shot(index)?;
            writeln!(out, "Removed {}", removed.label())?;
            session.save()?;
        }

        Command::Edit {
            index,
            name,
            trim_in,
            trim_out,
            comment,
        } => {
            let edit = ShotMetadata {
                name,
                trim_in,
                trim_out,
                comment,
            };
            if edit.is_empty() {
                bail!("Nothing to edit: pass --name, --trim-in, --trim-out or --comment");
            }
            session.project.apply_metadata(index, edit)?;
            print_shot(out, &session.project, index)?;
            session.save()?;
        }

        Command::List => print_timeline(out, &session.project)?,

        Command::Scrub { seconds } => {
            session.scrub(seconds);
            let playhead = session.playback().current_time as f64;
            match session.project.shot_at_time(playhead) {
                Some((index, offset)) => {
                    let shot = &session.project.shots()[index];
                    writeln!(
                        out,
                        "{}  [{}] {} (+{:.2}s)",
                        session.timecode(),
                        index,
                        shot.label(),
                        offset
                    )?;
                }
                None => writeln!(out, "{}  (past end of timeline)", session.timecode())?,
            }
        }

        Command::Export {
            output,
            concat_list,
        } => {
            let job = ExportJob::new(&output)
                .with_concat_list(concat_list.unwrap_or_else(|| config.concat_list_path.clone()))
                .with_ffmpeg(config.ffmpeg_path.clone());
            job.run(&session.project)?;
            info!(output = %output.display(), "Exported");
            writeln!(out, "Exported {}", output.display())?;
        }
    }

    Ok(())
}

fn create_project(path: &Path, force: bool, out: &mut dyn Write) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Session::new().save_as(path)?;
    writeln!(out, "Created {}", path.display())?;
    Ok(())
}

fn print_shot(out: &mut dyn Write, project: &Project, index: usize) -> Result<()> {
    if let Some(shot) = project.shot(index) {
        writeln!(out, "[{}] {}", index, shot.label())?;
    }
    Ok(())
}

fn print_timeline(out: &mut dyn Write, project: &Project) -> Result<()> {
    if project.is_empty() {
        writeln!(out, "(no shots)")?;
        return Ok(());
    }

    let mut start = 0.0;
    for (index, shot) in project.shots().iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {}  {}",
            index,
            format_timecode(start as u64),
            shot.label()
        )?;
        if !shot.comment.is_empty() {
            writeln!(out, "     {}", shot.comment)?;
        }
        start += shot.duration();
    }
    writeln!(
        out,
        "{} shots, {:.2}s total",
        project.len(),
        project.total_duration()
    )?;
    Ok(())
}
