//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tour_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn error_kinds_display() {
    assert!(format!("{}", Error::io("disk full")).contains("disk full"));
    assert!(format!("{}", Error::serialization("bad marker")).starts_with("serialization error"));
    assert!(format!("{}", Error::editor("no tty")).starts_with("editor error"));
}

#[test]
fn error_from_io() {
    let err: Error = std::io::Error::other("boom").into();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}

#[test]
fn error_context_optional() {
    let err = Error::invalid_argument("--frob");
    assert!(err.context.is_none());

    let err = err.with_context(ErrorContext::new().with_frame("types"));
    assert_eq!(err.context.unwrap().stack, vec!["types".to_string()]);
}
