//! Integration tests for CLI parsing and execution

use tour_lessons::{Lesson, RunThrough, TourConfig};
use tour_runtime::{LogLevel, parse_args, run_with};

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("tour")
        .chain(list.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn help_and_version_flags() {
    let config = parse_args(&args(&["-h", "-V"])).unwrap();
    assert!(config.show_help);
    assert!(config.show_version);
}

#[test]
fn log_level_requires_known_value() {
    let config = parse_args(&args(&["--log-level", "warn"])).unwrap();
    assert_eq!(config.log_level, Some(LogLevel::Warn));
    assert!(parse_args(&args(&["--log-level", "shout"])).is_err());
    assert!(parse_args(&args(&["--log-level"])).is_err());
}

#[test]
fn stop_after_parses_lesson_names() {
    let config = parse_args(&args(&["--stop-after", "beyond-hello"])).unwrap();
    assert_eq!(config.tour.stop_after, Some(Lesson::BeyondHello));
}

#[test]
fn run_with_stop_after_hello() {
    let config = TourConfig::new().with_stop_after(Lesson::Hello);
    let mut out = Vec::new();
    let outcome = run_with(&config, &mut out, &mut RunThrough).unwrap();
    assert_eq!(out, b"Hello world!\n");
    assert_eq!(outcome.completed, vec![Lesson::Hello]);
}
