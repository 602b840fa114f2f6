//! Error types, persistent collections, and value rendering for the syntax tour.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`TourVec`], [`TourMap`])
//! - [`Render`] - The default textual form of every value the tour prints

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod render;

pub use collections::{TourMap, TourVec};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use render::{Render, render_line};

/// Complex number with two `f64` components.
pub use num_complex::Complex64;
