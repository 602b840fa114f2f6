//! Snapshot serialization of the types lesson using `MessagePack`.
//!
//! This module provides functions for saving and loading a [`TypesReport`]
//! to/from files using the `MessagePack` binary format.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;

use tour_foundation::{Error, ErrorContext, Result};
use tour_lessons::TypesReport;

/// Serializes a report to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(report: &TypesReport) -> Result<Vec<u8>> {
    encode(report)
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(value).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a report from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<TypesReport> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves a report to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does. The
/// report is encoded before the file is opened, so an existing file is left
/// alone when encoding fails.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(report: &TypesReport, path: P) -> Result<()> {
    save_value(report, path.as_ref())
}

fn save_value<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let context = || ErrorContext::new().with_source(path.display().to_string());

    let bytes = encode(value).map_err(|e| e.with_context(context()))?;

    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file: {e}")).with_context(context()))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(format!("failed to write file: {e}")).with_context(context()))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "snapshot saved");
    Ok(())
}

/// Loads a report from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<TypesReport> {
    let path = path.as_ref();
    let context = || ErrorContext::new().with_source(path.display().to_string());

    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file: {e}")).with_context(context()))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file: {e}")).with_context(context()))?;

    from_bytes(&bytes).map_err(|e| e.with_context(context()))
}
