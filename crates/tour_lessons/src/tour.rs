//! Tour orchestration.
//!
//! A tour runs each lesson once, top to bottom, with each lesson calling
//! the next from its tail:
//! 1. Prints the greeting
//! 2. Calls a function with two return values
//! 3. Walks through built-in types
//! 4. Hands off to the control-flow lesson
//!
//! The lessons pass a [`Chain`] down the calls. Before each lesson the
//! chain asks a [`Checkpoint`] whether to keep going.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tour_foundation::{Error, Result};

use crate::arithmetic::beyond_hello;
use crate::config::TourConfig;
use crate::types::TypesReport;

// =============================================================================
// Lesson
// =============================================================================

/// One step of the tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lesson {
    /// The greeting line.
    Hello,
    /// Multiple return values.
    BeyondHello,
    /// Built-in types, sequences, handles, and maps.
    Types,
    /// Continuation into control flow.
    FlowControl,
}

impl Lesson {
    /// Every lesson, in tour order.
    pub const ALL: [Lesson; 4] = [
        Lesson::Hello,
        Lesson::BeyondHello,
        Lesson::Types,
        Lesson::FlowControl,
    ];

    /// The lesson's command-line name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::BeyondHello => "beyond-hello",
            Self::Types => "types",
            Self::FlowControl => "flow-control",
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|lesson| lesson.name() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown lesson: {s}")))
    }
}

// =============================================================================
// Checkpoint
// =============================================================================

/// What to do after a checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Run the next lesson.
    Continue,
    /// End the tour here.
    Stop,
}

/// Consulted before every lesson.
///
/// The runtime implements this with a line editor to step through the tour
/// interactively.
pub trait Checkpoint {
    /// Called before `lesson` runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkpoint cannot decide (e.g. terminal failure).
    fn before(&mut self, lesson: Lesson) -> Result<Flow>;
}

/// A checkpoint that never pauses.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunThrough;

impl Checkpoint for RunThrough {
    fn before(&mut self, _lesson: Lesson) -> Result<Flow> {
        Ok(Flow::Continue)
    }
}

// =============================================================================
// Chain
// =============================================================================

/// Result of a tour run.
#[derive(Clone, Debug, Default)]
pub struct TourOutcome {
    /// Lessons that ran to completion, in order.
    pub completed: Vec<Lesson>,
    /// The `(sum, prod)` pair from the arithmetic lesson, if it ran.
    pub arithmetic: Option<(i64, i64)>,
    /// State captured by the types lesson, if it ran.
    pub types: Option<TypesReport>,
    /// True if a checkpoint or `stop_after` ended the tour before the last lesson.
    pub stopped_early: bool,
}

/// State threaded through the lessons as each one calls the next.
///
/// A lesson writes to [`Chain::out`], finishes its own work, then hands off
/// with [`Chain::enter`]. Entering consults the checkpoint first, so the
/// tour can stop between any two lessons even though the calls are nested.
pub struct Chain<'a, W: Write + ?Sized> {
    out: &'a mut W,
    checkpoint: &'a mut dyn Checkpoint,
    stop_after: Option<Lesson>,
    halted: bool,
    pub(crate) outcome: TourOutcome,
}

impl<'a, W: Write + ?Sized> Chain<'a, W> {
    /// Creates a chain writing to `out` and asking `checkpoint` before each lesson.
    #[must_use]
    pub fn new(out: &'a mut W, checkpoint: &'a mut dyn Checkpoint) -> Self {
        Self {
            out,
            checkpoint,
            stop_after: None,
            halted: false,
            outcome: TourOutcome::default(),
        }
    }

    /// Ends the chain once `lesson` completes.
    #[must_use]
    pub fn with_stop_after(mut self, lesson: Option<Lesson>) -> Self {
        self.stop_after = lesson;
        self
    }

    /// The output sink.
    pub fn out(&mut self) -> &mut W {
        self.out
    }

    /// Runs `lesson` unless the chain has ended or the checkpoint stops it.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkpoint fails or the lesson fails. A lesson
    /// failure gains a frame naming `lesson`, so an error raised deep in the
    /// chain lists every lesson it passed through, innermost first.
    pub fn enter(
        &mut self,
        lesson: Lesson,
        run: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        if self.halted {
            return Ok(());
        }
        if self.checkpoint.before(lesson)? == Flow::Stop {
            tracing::debug!(%lesson, "tour stopped at checkpoint");
            self.halted = true;
            self.outcome.stopped_early = true;
            return Ok(());
        }

        tracing::debug!(%lesson, "lesson started");
        run(self).map_err(|e| e.in_frame(lesson.name()))
    }

    /// Marks `lesson` as done and flushes its output so it is visible before
    /// the next checkpoint.
    pub(crate) fn complete(&mut self, lesson: Lesson) -> Result<()> {
        self.out.flush()?;
        self.outcome.completed.push(lesson);
        tracing::debug!(%lesson, "lesson finished");

        if self.stop_after == Some(lesson) {
            self.halted = true;
            self.outcome.stopped_early = lesson != Lesson::FlowControl;
        }
        Ok(())
    }

    /// Consumes the chain, returning what the lessons recorded.
    #[must_use]
    pub fn into_outcome(self) -> TourOutcome {
        self.outcome
    }
}

// =============================================================================
// Tour
// =============================================================================

/// Runs the lessons in order against an output sink.
#[derive(Clone, Debug, Default)]
pub struct Tour {
    config: TourConfig,
}

impl Tour {
    /// Creates a tour with the given configuration.
    #[must_use]
    pub fn new(config: TourConfig) -> Self {
        Self { config }
    }

    /// Starts the chain at [`hello`], writing to `out` and consulting
    /// `checkpoint` before each lesson.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails or the checkpoint fails.
    /// The error carries the names of the lessons that were running.
    pub fn run<W: Write + ?Sized>(
        &self,
        out: &mut W,
        checkpoint: &mut dyn Checkpoint,
    ) -> Result<TourOutcome> {
        let mut chain = Chain::new(out, checkpoint).with_stop_after(self.config.stop_after);
        chain.enter(Lesson::Hello, hello)?;
        Ok(chain.into_outcome())
    }
}

/// Prints the greeting, then continues with [`beyond_hello`].
///
/// # Errors
///
/// Returns an error if writing to the chain's output fails.
pub fn hello<W: Write + ?Sized>(chain: &mut Chain<'_, W>) -> Result<()> {
    writeln!(chain.out(), "Hello world!")?;
    chain.complete(Lesson::Hello)?;
    chain.enter(Lesson::BeyondHello, beyond_hello)
}
