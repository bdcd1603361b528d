//! Whole-file text IO.

use std::fs;
use std::io;
use std::path::Path;

use crate::atomic_write;

/// Load the contents of an entire file into a string.
pub fn read_text_file(path: impl AsRef<Path>) -> io::Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Read text file");
    Ok(text)
}

/// Load the raw bytes of an entire file, for callers that decode line by line.
pub fn read_file_bytes(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read file");
    Ok(bytes)
}

/// Replace the contents of `path` with `text`.
///
/// The previous file survives if the write fails.
pub fn write_text_file(path: impl AsRef<Path>, text: &str) -> io::Result<()> {
    let path = path.as_ref();
    atomic_write(path, text.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Wrote text file");
    Ok(())
}
