//! CLI, logging, step-through editor, and snapshots for the syntax tour.
//!
//! This crate provides:
//! - CLI argument parsing and execution ([`cli`])
//! - [`StepCheckpoint`] - Pauses between lessons using a line editor
//! - Tracing subscriber setup ([`logging`])
//! - Snapshot serialization and deserialization ([`serialize`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod editor;
pub mod logging;
pub mod serialize;

pub use cli::{CliConfig, execute, exit_code, parse_args, run_tour, run_with};
pub use editor::{LineEditor, ReadResult, RustylineEditor, StepCheckpoint};
pub use logging::LogLevel;
