//! Configuration for a tour run.

use std::path::PathBuf;

use crate::tour::Lesson;

/// Configuration for a tour run.
///
/// Controls tracing, stepping between lessons, early stopping, and
/// snapshot output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TourConfig {
    /// Emit lesson-level trace events.
    pub trace: bool,

    /// Pause before each lesson and wait for the user.
    pub step: bool,

    /// Stop after this lesson completes.
    pub stop_after: Option<Lesson>,

    /// Where to write the types lesson snapshot, if anywhere.
    pub snapshot: Option<PathBuf>,
}

impl TourConfig {
    /// Creates the default configuration: run everything, quietly.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable/disable tracing.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Builder method to enable/disable stepping.
    #[must_use]
    pub fn with_step(mut self, step: bool) -> Self {
        self.step = step;
        self
    }

    /// Builder method to stop after a lesson.
    #[must_use]
    pub fn with_stop_after(mut self, lesson: Lesson) -> Self {
        self.stop_after = Some(lesson);
        self
    }

    /// Builder method to set the snapshot path.
    #[must_use]
    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot = Some(path.into());
        self
    }
}
