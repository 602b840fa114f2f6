//! Continuation into control-flow constructs.

use std::io::Write;

use tour_foundation::Result;

use crate::tour::{Chain, Lesson};

/// Continues the tour into control flow.
///
/// This lesson is a placeholder and the end of the chain: it writes nothing
/// and only emits a trace event marking that the tour reached it.
///
/// # Errors
///
/// Returns an error if flushing the chain's output fails.
pub fn learn_flow_control<W: Write + ?Sized>(chain: &mut Chain<'_, W>) -> Result<()> {
    tracing::debug!("flow control lesson reached");
    chain.complete(Lesson::FlowControl)
}
