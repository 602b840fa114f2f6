//! Integration tests for the tour runner

use std::io::{self, Write};

use tour_foundation::ErrorKind;
use tour_lessons::{Checkpoint, Flow, Lesson, RunThrough, Tour, TourConfig};

/// Records which lessons it was asked about.
#[derive(Default)]
struct Recorder {
    seen: Vec<Lesson>,
}

impl Checkpoint for Recorder {
    fn before(&mut self, lesson: Lesson) -> tour_foundation::Result<Flow> {
        self.seen.push(lesson);
        Ok(Flow::Continue)
    }
}

/// A writer that fails once it has accepted `limit` bytes.
struct FailingWriter {
    written: usize,
    limit: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn first_line_is_greeting() {
    let mut out = Vec::new();
    Tour::default().run(&mut out, &mut RunThrough).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().next(), Some("Hello world!"));
}

#[test]
fn full_output() {
    let mut out = Vec::new();
    Tour::default().run(&mut out, &mut RunThrough).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Hello world!");
    assert_eq!(lines[1], "sum: 7 prod: 12");
    assert_eq!(lines[2], "[1 2 3 4 5 6]");
    assert_eq!(lines[3], "[1 2 3 4 5 6 7 8 9]");
    assert_eq!(lines[4], "7 -2");
    assert_eq!(
        lines.last().copied(),
        Some("[1 2 3 4 5 6 7 8 9] (3+4i) [0 0 0 0] [4 5 9] [] map[four:4 one:14195 three:3]")
    );
}

#[test]
fn checkpoint_sees_every_lesson_in_order() {
    let mut recorder = Recorder::default();
    Tour::default().run(&mut io::sink(), &mut recorder).unwrap();
    assert_eq!(recorder.seen, Lesson::ALL.to_vec());
}

#[test]
fn write_failure_inside_types_lists_outer_lessons() {
    // Greeting and arithmetic fit, the first sequence line does not.
    let mut out = FailingWriter {
        written: 0,
        limit: 29,
    };
    let err = Tour::default().run(&mut out, &mut RunThrough).unwrap_err();

    let context = err.context.expect("lesson context");
    assert_eq!(context.stack, vec!["types", "beyond-hello", "hello"]);
}

#[test]
fn stop_after_types_skips_flow_control() {
    let tour = Tour::new(TourConfig::new().with_stop_after(Lesson::Types));
    let outcome = tour.run(&mut io::sink(), &mut RunThrough).unwrap();
    assert_eq!(outcome.completed.last(), Some(&Lesson::Types));
    assert!(outcome.types.is_some());
    assert!(outcome.stopped_early);
}

#[test]
fn write_failure_names_lesson_chain() {
    // "Hello world!\n" fits, the arithmetic line does not.
    let mut out = FailingWriter {
        written: 0,
        limit: 13,
    };
    let err = Tour::default().run(&mut out, &mut RunThrough).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::IoError(_)));
    let context = err.context.expect("lesson context");
    assert_eq!(
        context.stack,
        vec!["beyond-hello".to_string(), "hello".to_string()]
    );
}
