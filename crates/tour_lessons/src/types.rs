//! Built-in types and literals.
//!
//! [`learn_types`] walks through scalars, fixed-size arrays, growable
//! sequences, owned handles, and maps. Every value it declares ends up in
//! its printed output and in the returned [`TypesReport`].

use std::io::Write;

use tour_foundation::{Complex64, Error, Render, Result, TourMap, TourVec, render_line};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flow::learn_flow_control;
use crate::memory::learn_memory;
use crate::tour::{Chain, Lesson};

/// Everything the types lesson declared, in its final state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypesReport {
    /// A plain string literal.
    pub text: String,
    /// A raw string literal spanning two lines.
    pub raw_text: String,
    /// A single non-ASCII Unicode scalar value.
    pub sigma: char,
    /// A 64-bit float.
    pub float: f64,
    /// A complex number with `f64` parts.
    pub complex: Complex64,
    /// An explicitly unsigned integer.
    pub unsigned: u64,
    /// A float narrowed to 32 bits.
    pub narrowed: f32,
    /// A byte converted from a line-feed character.
    pub newline: u8,
    /// A fixed-size array left at its default values.
    pub zeros: [i64; 4],
    /// A fixed-size array with literal contents.
    pub fixed: [i64; 3],
    /// A growable sequence with literal contents.
    pub literal: TourVec<i64>,
    /// A growable sequence pre-sized to four default values.
    pub presized: TourVec<i64>,
    /// A declared but unallocated sequence of sequences.
    pub nested: Vec<Vec<f64>>,
    /// Bytes taken from a string.
    pub bytes: TourVec<u8>,
    /// The sequence that was appended to, after both appends.
    pub appended: TourVec<i64>,
    /// Values read through the two heap handles.
    pub handles: (i64, i64),
    /// String keys mapped to integers, after the insert.
    pub scores: TourMap<String, i64>,
}

/// Runs the types lesson, writing each step to the chain's output and
/// recording a [`TypesReport`] in its outcome. Then continues with
/// [`learn_flow_control`].
///
/// # Errors
///
/// Returns an error if writing to the chain's output fails.
pub fn learn_types<W: Write + ?Sized>(chain: &mut Chain<'_, W>) -> Result<()> {
    let out = chain.out();

    let text = "Learn Rust!";

    let raw_text = r#"A "raw" string
literal can include line breaks."#;

    let sigma = 'Σ';

    let float = 3.14195_f64;
    let complex = Complex64::new(3.0, 4.0);

    let unsigned: u64 = 7;
    let narrowed: f32 = 22.0 / 7.0;

    let newline = u8::try_from('\n').map_err(|e| Error::invalid_argument(e.to_string()))?;

    let zeros: [i64; 4] = Default::default();
    let fixed = [3_i64, 1, 5];

    let literal = TourVec::from([4_i64, 5, 9]);
    let presized: TourVec<i64> = TourVec::with_len(4);
    let nested: Vec<Vec<f64>> = Vec::new();
    let bytes: TourVec<u8> = "a slice".bytes().collect();

    let mut s = TourVec::from([1_i64, 2, 3]);
    s = s.append([4, 5, 6]);
    writeln!(out, "{}", s.render())?;
    s = s.concat(&TourVec::from([7, 8, 9]));
    writeln!(out, "{}", s.render())?;

    let (p, q) = learn_memory();
    writeln!(out, "{}", render_line(&[&*p, &*q]))?;

    let mut scores: TourMap<String, i64> = [("three".to_string(), 3), ("four".to_string(), 4)]
        .into_iter()
        .collect();
    scores = scores.insert("one".to_string(), 14195);

    writeln!(
        out,
        "{}",
        render_line(&[
            &text, &raw_text, &sigma, &float, &unsigned, &narrowed, &newline, &fixed, &presized,
            &bytes,
        ])
    )?;

    writeln!(
        out,
        "{}",
        render_line(&[&s, &complex, &zeros, &literal, &nested, &scores])
    )?;

    chain.outcome.types = Some(TypesReport {
        text: text.to_string(),
        raw_text: raw_text.to_string(),
        sigma,
        float,
        complex,
        unsigned,
        narrowed,
        newline,
        zeros,
        fixed,
        literal,
        presized,
        nested,
        bytes,
        appended: s,
        handles: (*p, *q),
        scores,
    });
    chain.complete(Lesson::Types)?;

    chain.enter(Lesson::FlowControl, learn_flow_control)
}
