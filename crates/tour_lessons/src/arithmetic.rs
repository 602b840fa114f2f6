//! Functions with parameters and multiple return values.

use std::io::Write;

use tour_foundation::{Result, render_line};

use crate::tour::{Chain, Lesson};
use crate::types::learn_types;

/// Returns the sum and the product of `x` and `y`.
///
/// Both results wrap on overflow using two's complement arithmetic, so the
/// function is total over every pair of `i64` inputs.
#[must_use]
pub fn learn_multiple(x: i64, y: i64) -> (i64, i64) {
    (x.wrapping_add(y), x.wrapping_mul(y))
}

/// Declares two integers, calls [`learn_multiple`], and prints both results.
/// Then continues with [`learn_types`].
///
/// The `(sum, prod)` pair that was printed is recorded in the chain's outcome.
///
/// # Errors
///
/// Returns an error if writing to the chain's output fails.
#[allow(clippy::needless_late_init)]
pub fn beyond_hello<W: Write + ?Sized>(chain: &mut Chain<'_, W>) -> Result<()> {
    let x: i64;
    x = 3;
    let y = 4;
    let (sum, prod) = learn_multiple(x, y);
    writeln!(
        chain.out(),
        "{}",
        render_line(&[&"sum:", &sum, &"prod:", &prod])
    )?;
    chain.outcome.arithmetic = Some((sum, prod));
    chain.complete(Lesson::BeyondHello)?;

    chain.enter(Lesson::Types, learn_types)
}
