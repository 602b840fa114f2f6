//! Integration tests for snapshot writing

use std::process::ExitCode;

use tour_foundation::ErrorKind;
use tour_lessons::{Lesson, RunThrough, TourConfig};
use tour_runtime::serialize::load_from_file;
use tour_runtime::{exit_code, run_with};

#[test]
fn snapshot_written_after_full_tour() {
    let path = std::env::temp_dir().join("syntax_tour_cli_snapshot.msgpack");
    let _ = std::fs::remove_file(&path);

    let config = TourConfig::new().with_snapshot(&path);
    let outcome = run_with(&config, &mut std::io::sink(), &mut RunThrough).unwrap();

    let restored = load_from_file(&path).unwrap();
    assert_eq!(Some(restored), outcome.types);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn no_snapshot_when_types_lesson_skipped() {
    let path = std::env::temp_dir().join("syntax_tour_skipped_snapshot.msgpack");
    let _ = std::fs::remove_file(&path);

    let config = TourConfig::new()
        .with_stop_after(Lesson::BeyondHello)
        .with_snapshot(&path);
    let outcome = run_with(&config, &mut std::io::sink(), &mut RunThrough).unwrap();

    assert!(outcome.types.is_none());
    assert!(!path.exists());
}

#[test]
fn unwritable_snapshot_fails_with_path() {
    let dir = std::env::temp_dir().join("syntax_tour_no_such_dir");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("nested").join("snap.msgpack");

    let config = TourConfig::new().with_snapshot(&path);
    let mut out = Vec::new();
    let err = run_with(&config, &mut out, &mut RunThrough).unwrap_err();

    // The tour itself ran before the snapshot failed.
    assert!(String::from_utf8(out).unwrap().starts_with("Hello world!\n"));
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
    let source = err.context.as_ref().and_then(|c| c.source.clone());
    assert_eq!(source, Some(path.display().to_string()));

    let mut stderr = Vec::new();
    assert_eq!(exit_code(&Err(err), &mut stderr), ExitCode::FAILURE);
    let report = String::from_utf8(stderr).unwrap();
    assert!(report.contains("Error: I/O error"));
    assert!(report.contains(&format!("at {}", path.display())));
}
