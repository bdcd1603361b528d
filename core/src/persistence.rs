//! Line-oriented registry files.
//!
//! One entry per line, `name<marker>value`. Blank lines are ignored and lines
//! that do not parse are skipped on load. Values are written with the shortest
//! decimal form that reads back to the same `f64`, so a store/load cycle is
//! lossless.

use std::fmt::Write;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use valman_types::{Marker, Registry};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cannot read {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    FileWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counts from one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Whether opening a registry file found an existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened(LoadReport),
    Created,
}

/// Parse registry file contents and merge every well-formed line into
/// `registry`. Lines are decoded one at a time, so a line that is not UTF-8 is
/// skipped like any other malformed line.
pub fn merge_bytes(registry: &mut Registry, bytes: &[u8], marker: &Marker) -> LoadReport {
    let mut report = LoadReport::default();
    for (index, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let line = match str::from_utf8(raw) {
            Ok(line) => line,
            Err(err) => {
                report.skipped += 1;
                tracing::warn!(line = index + 1, "Skipping registry line that is not UTF-8: {err}");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match registry.add_line(line, marker) {
            Ok(_) => report.loaded += 1,
            Err(err) => {
                report.skipped += 1;
                tracing::warn!(line = index + 1, "Skipping malformed registry line: {err}");
            }
        }
    }
    report
}

/// Serialize every entry as `name<marker>value\n`, ordered by name.
#[must_use]
pub fn render(registry: &Registry, marker: &Marker) -> String {
    let mut out = String::new();
    for (name, value) in registry.iter() {
        let _ = writeln!(out, "{name}{marker}{value}");
    }
    out
}

/// Read `path` and merge its entries into `registry`.
///
/// The file is read completely before the registry is touched, so a read
/// failure leaves it unchanged.
pub fn load_into(
    registry: &mut Registry,
    path: &Path,
    marker: &Marker,
) -> Result<LoadReport, PersistenceError> {
    let bytes = valman_utils::read_file_bytes(path).map_err(|source| {
        PersistenceError::FileNotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let report = merge_bytes(registry, &bytes, marker);
    tracing::info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        "Loaded registry"
    );
    Ok(report)
}

/// Build a registry from `path`; a missing file yields an empty registry.
pub fn open(path: &Path, marker: &Marker) -> Result<(Registry, OpenOutcome), PersistenceError> {
    let mut registry = Registry::new();
    match load_into(&mut registry, path, marker) {
        Ok(report) => Ok((registry, OpenOutcome::Opened(report))),
        Err(PersistenceError::FileNotFound { source, .. })
            if source.kind() == io::ErrorKind::NotFound =>
        {
            tracing::info!(path = %path.display(), "Registry file not found; starting empty");
            Ok((registry, OpenOutcome::Created))
        }
        Err(err) => Err(err),
    }
}

/// Replace `path` with the serialized registry. Returns the entry count.
pub fn store(registry: &Registry, path: &Path, marker: &Marker) -> Result<usize, PersistenceError> {
    let text = render(registry, marker);
    valman_utils::write_text_file(path, &text).map_err(|source| {
        PersistenceError::FileWriteFailure {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::info!(path = %path.display(), entries = registry.len(), "Stored registry");
    Ok(registry.len())
}
