//! Owned heap handles.

/// Allocates two integers on the heap and hands back owning handles to them.
///
/// The first value is written into slot 3 of a freshly zeroed 20-element
/// buffer and then moved into its own box; the second is boxed directly.
/// Dereferencing the handles yields `7` and `-2`.
#[must_use]
pub fn learn_memory() -> (Box<i64>, Box<i64>) {
    let mut buffer = vec![0_i64; 20];
    buffer[3] = 7;
    let p = Box::new(buffer[3]);
    let r = -2;
    let q = Box::new(r);
    tracing::trace!(p = *p, q = *q, "allocated handles");
    (p, q)
}
