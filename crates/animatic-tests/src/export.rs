//! Integration tests for export: timeline → concat list → ffmpeg arguments.

use animatic_app::{commands, AppConfig, Command};
use animatic_core::AnimaticError;
use animatic_media::{ConcatList, ExportJob};
use animatic_timeline::Project;
use std::path::PathBuf;

#[cfg(unix)]
#[test]
fn concat_list_matches_timeline_after_edits() {
    let mut project = Project::new();
    project.add_shot("/boards/a.mp4").unwrap();
    project.add_shot("/boards/b.mp4").unwrap();
    project.add_shot("/boards/c.mp4").unwrap();
    project.move_shot(2, 0).unwrap();
    project.replace_media(1, "/boards/a_v2.mp4", Some(3.0)).unwrap();

    let list = ConcatList::from_project(&project).unwrap();
    assert_eq!(
        list.render(),
        "file '/boards/c.mp4'\nfile '/boards/a_v2.mp4'\nfile '/boards/b.mp4'"
    );
}

#[test]
fn trim_points_are_not_part_of_the_list() {
    let mut project = Project::new();
    project.add_shot_trimmed("a.mp4", 2.0, 3.0).unwrap();

    let rendered = ConcatList::from_project(&project).unwrap().render();
    assert!(!rendered.contains("inpoint"));
    assert!(!rendered.contains("outpoint"));
    assert_eq!(rendered.lines().count(), 1);
}

#[test]
fn export_command_reports_missing_ffmpeg() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let project_path = tmp.path().join("board.animatic.json");
    let list_path = tmp.path().join("list.txt");

    let mut project = Project::new();
    project.add_shot("a.mp4").unwrap();
    project.save(&project_path).unwrap();

    let config = AppConfig {
        ffmpeg_path: Some(PathBuf::from("/definitely/not/here/ffmpeg")),
        concat_list_path: list_path.clone(),
        ..Default::default()
    };
    let mut out = Vec::new();
    let err = commands::execute(
        Command::Export {
            output: tmp.path().join("out.mp4"),
            concat_list: None,
        },
        &project_path,
        &config,
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AnimaticError>(),
        Some(AnimaticError::NotFound(_))
    ));
    assert!(!list_path.exists());
    assert!(out.is_empty());
}

#[test]
fn export_job_uses_configured_list_path() {
    let job = ExportJob::new("out.mp4").with_concat_list("work/list.txt");
    let args = job.ffmpeg_args();
    let input = args.iter().position(|a| a == "-i").unwrap();
    assert_eq!(args[input + 1], "work/list.txt");
    assert_eq!(args.last().map(String::as_str), Some("out.mp4"));
}
