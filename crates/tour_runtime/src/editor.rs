//! Line editor abstraction for stepping through the tour.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! so the step-through checkpoint can use rustyline while tests script input.

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use tour_foundation::{Error, Result};
use tour_lessons::{Checkpoint, Flow, Lesson};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: DefaultEditor,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder().auto_add_history(false).build();
        let editor = DefaultEditor::with_config(config).map_err(|e| Error::editor(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::editor(e.to_string())),
        }
    }
}

/// Pauses before every lesson until the user presses Enter.
///
/// Typing `q` or `quit`, or pressing Ctrl+C / Ctrl+D, ends the tour.
pub struct StepCheckpoint<E: LineEditor> {
    editor: E,
}

impl<E: LineEditor> StepCheckpoint<E> {
    /// Creates a checkpoint that reads from `editor`.
    #[must_use]
    pub fn new(editor: E) -> Self {
        Self { editor }
    }

    fn prompt(lesson: Lesson) -> String {
        format!("\x1b[1;32m[next: {lesson}]\x1b[0m press Enter to continue, q to quit > ")
    }
}

impl<E: LineEditor> Checkpoint for StepCheckpoint<E> {
    fn before(&mut self, lesson: Lesson) -> Result<Flow> {
        match self.editor.read_line(&Self::prompt(lesson))? {
            ReadResult::Line(line) => match line.trim() {
                "q" | "quit" => Ok(Flow::Stop),
                _ => Ok(Flow::Continue),
            },
            ReadResult::Interrupted | ReadResult::Eof => Ok(Flow::Stop),
        }
    }
}
