//! Errors reported by the editor.
//!
//! None of these end a session: the editor prints the message and reads the
//! next line.

use thiserror::Error;

use valman_types::{EntryName, ParseError};

use crate::persistence::PersistenceError;

/// Coarse classification of an [`EditorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedCommand,
    UnresolvedEntry,
    AmbiguousEntry,
    FileNotFound,
    FileWriteFailure,
    NoTarget,
    NonFiniteResult,
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("parse error: {0}")]
    MalformedCommand(#[from] ParseError),
    #[error("no entry matches `{candidate}`")]
    UnresolvedEntry { candidate: String },
    #[error("`{candidate}` is ambiguous: {}", format_candidates(.candidates))]
    AmbiguousEntry {
        candidate: String,
        candidates: Vec<EntryName>,
    },
    #[error("no target: name an entry or select one first")]
    NoTarget,
    #[error("{op} of `{name}` would not be a finite number (value {value})")]
    NonFiniteResult {
        op: &'static str,
        name: EntryName,
        value: f64,
    },
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl EditorError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditorError::MalformedCommand(_) => ErrorKind::MalformedCommand,
            EditorError::UnresolvedEntry { .. } => ErrorKind::UnresolvedEntry,
            EditorError::AmbiguousEntry { .. } => ErrorKind::AmbiguousEntry,
            EditorError::NoTarget => ErrorKind::NoTarget,
            EditorError::NonFiniteResult { .. } => ErrorKind::NonFiniteResult,
            EditorError::Persistence(PersistenceError::FileNotFound { .. }) => {
                ErrorKind::FileNotFound
            }
            EditorError::Persistence(PersistenceError::FileWriteFailure { .. }) => {
                ErrorKind::FileWriteFailure
            }
        }
    }
}

fn format_candidates(candidates: &[EntryName]) -> String {
    candidates
        .iter()
        .map(EntryName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
