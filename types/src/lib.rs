//! Core domain types for Valman.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! the value registry, the line grammar of the editor, and name autocompletion.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

pub mod classify;
mod complete;
mod marker;
mod parse;
mod registry;
mod settings;

pub use complete::{MatchMode, Resolution, resolve};
pub use marker::{DEFAULT_MARKER, Marker, MarkerError};
pub use parse::{Assignment, Command, ParseError, VERBS, Verb, parse_assignment, parse_line};
pub use registry::Registry;
pub use settings::{DEFAULT_PROMPT, EditorSettings};

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use thiserror::Error;

// ============================================================================
// Entry names
// ============================================================================

/// Name of a registry entry.
///
/// Invariant: trimmed, non-empty, and free of line breaks (one entry per line
/// in the persisted format).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryName(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryNameError {
    #[error("entry name must not be empty")]
    Empty,
    #[error("entry name must not contain line breaks")]
    LineBreak,
}

impl EntryName {
    pub fn new(value: impl Into<String>) -> Result<Self, EntryNameError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EntryNameError::Empty);
        }
        if trimmed.contains(['\n', '\r']) {
            return Err(EntryNameError::LineBreak);
        }
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for EntryName {
    type Error = EntryNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EntryName {
    type Error = EntryNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntryName> for String {
    fn from(value: EntryName) -> Self {
        value.0
    }
}

impl Deref for EntryName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for EntryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// Lets the registry map be queried with plain `&str` keys.
impl Borrow<str> for EntryName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
