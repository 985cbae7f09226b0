//! Property tests for the shot list model.

use animatic_timeline::{Project, Shot};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add { trim_in: f64, trim_out: f64 },
    Move { from: usize, to: usize },
    Replace { index: usize, length: Option<f64> },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0.0..60.0f64, 0.0..60.0f64).prop_map(|(trim_in, trim_out)| Op::Add { trim_in, trim_out }),
        (any::<usize>(), any::<usize>()).prop_map(|(from, to)| Op::Move { from, to }),
        (any::<usize>(), proptest::option::of(0.0..60.0f64))
            .prop_map(|(index, length)| Op::Replace { index, length }),
    ]
}

/// Apply ops, folding indices into range so every op succeeds.
fn build(ops: &[Op]) -> Project {
    let mut project = Project::new();
    for (n, op) in ops.iter().enumerate() {
        match *op {
            Op::Add { trim_in, trim_out } => {
                project.add_shot_trimmed(format!("clip_{n}.mp4"), trim_in, trim_out).unwrap();
            }
            Op::Move { from, to } if !project.is_empty() => {
                let len = project.len();
                project.move_shot(from % len, to % len).unwrap();
            }
            Op::Replace { index, length } if !project.is_empty() => {
                let index = index % project.len();
                project
                    .replace_media(index, format!("replacement_{n}.mov"), length)
                    .unwrap();
            }
            _ => {}
        }
    }
    project
}

fn sorted_by_id(shots: &[Shot]) -> Vec<Shot> {
    let mut shots = shots.to_vec();
    shots.sort_by_key(Shot::id);
    shots
}

proptest! {
    #[test]
    fn nth_added_shot_gets_id_ten_n(count in 1usize..40) {
        let mut project = Project::new();
        for n in 1..=count {
            let shot = project.add_shot(format!("{n}.mp4")).unwrap();
            let expected = 10 * n as i64;
            prop_assert_eq!(shot.id(), expected);
            prop_assert_eq!(&shot.name, &format!("shot_{:03}", expected));
        }
    }

    #[test]
    fn replace_keeps_trim_out_within_bounds(
        trim_in in 0.0..30.0f64,
        trim_out in 0.0..30.0f64,
        length in 0.0..30.0f64,
    ) {
        let mut project = Project::new();
        project.add_shot_trimmed("a.mp4", trim_in, trim_out).unwrap().comment = "note".into();
        let before = project.shot(0).unwrap().clone();

        project.replace_media(0, "b.mp4", Some(length)).unwrap();
        let after = project.shot(0).unwrap();

        // A window already inside the media, or inverted, is left alone.
        if trim_out > length {
            prop_assert!(after.trim_out <= length || after.trim_out == trim_in);
            prop_assert!(after.trim_out >= after.trim_in);
        } else {
            prop_assert_eq!(after.trim_out, trim_out);
        }
        prop_assert_eq!(after.trim_in, before.trim_in);
        prop_assert_eq!(after.id(), before.id());
        prop_assert_eq!(&after.name, &before.name);
        prop_assert_eq!(&after.comment, &before.comment);
    }

    #[test]
    fn clamp_respects_length_when_in_point_fits(
        trim_in in 0.0..10.0f64,
        extra in 0.0..20.0f64,
        length in 10.0..20.0f64,
    ) {
        let mut project = Project::new();
        project.add_shot_trimmed("a.mp4", trim_in, length + extra + 0.5).unwrap();
        project.replace_media(0, "b.mp4", Some(length)).unwrap();

        let shot = project.shot(0).unwrap();
        prop_assert_eq!(shot.trim_out, length);
        prop_assert!(shot.trim_out >= shot.trim_in);
    }

    #[test]
    fn move_only_permutes(count in 1usize..12, from in any::<usize>(), to in any::<usize>()) {
        let mut project = Project::new();
        for n in 0..count {
            project.add_shot_trimmed(format!("{n}.mp4"), n as f64, 10.0 + n as f64).unwrap();
        }
        let before = project.shots().to_vec();
        let (from, to) = (from % count, to % count);

        project.move_shot(from, to).unwrap();
        prop_assert_eq!(&project.shots()[to], &before[from]);
        prop_assert_eq!(sorted_by_id(project.shots()), sorted_by_id(&before));

        project.move_shot(to, from).unwrap();
        prop_assert_eq!(project.shots(), before.as_slice());
    }

    #[test]
    fn save_load_round_trip(ops in proptest::collection::vec(op(), 0..30)) {
        let project = build(&ops);
        let loaded = Project::from_json(&project.to_json().unwrap()).unwrap();
        prop_assert_eq!(loaded.shots(), project.shots());
        prop_assert_eq!(loaded.next_id().unwrap(), project.next_id().unwrap());
    }

    #[test]
    fn duration_never_negative(trim_in in -1e6..1e6f64, trim_out in -1e6..1e6f64) {
        let mut project = Project::new();
        let shot = project.add_shot_trimmed("a.mp4", trim_in, trim_out).unwrap();
        prop_assert!(shot.duration() >= 0.0);
    }

    #[test]
    fn ids_stay_unique(ops in proptest::collection::vec(op(), 0..30)) {
        let project = build(&ops);
        let mut ids: Vec<i64> = project.shots().iter().map(Shot::id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }
}
