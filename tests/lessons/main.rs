//! Integration tests for Layer 1: Lessons
//!
//! Tests each lesson on its own and the tour that sequences them.

mod tour;
mod types;
