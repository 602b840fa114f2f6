//! The syntax tour lessons and the runner that sequences them.
//!
//! This crate provides:
//! - [`learn_multiple`] - A function returning two values
//! - [`learn_types`] - Built-in types, literals, sequences, and maps
//! - [`learn_memory`] - Owned heap handles to integers
//! - [`Tour`] - Starts the lesson chain against an output sink
//! - [`Chain`] - Carries the output and checkpoint from each lesson to the next

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod config;
pub mod flow;
pub mod memory;
pub mod tour;
pub mod types;

pub use arithmetic::{beyond_hello, learn_multiple};
pub use config::TourConfig;
pub use flow::learn_flow_control;
pub use memory::learn_memory;
pub use tour::{Chain, Checkpoint, Flow, Lesson, RunThrough, Tour, TourOutcome, hello};
pub use types::{TypesReport, learn_types};
