//! Syntax Tour - a guided walk through core language syntax
//!
//! This crate re-exports all layers of the tour for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: tour_runtime    — CLI, logging setup, step-through editor, snapshots
//! Layer 1: tour_lessons    — The lessons themselves and the tour runner
//! Layer 0: tour_foundation — Error, persistent collections, value rendering
//! ```

pub use tour_foundation as foundation;
pub use tour_lessons as lessons;
pub use tour_runtime as runtime;
