//! The two-character assignment marker.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use crate::classify::is_numeric;

pub const DEFAULT_MARKER: &str = "||";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("marker must be exactly two characters (got {0})")]
    Length(usize),
    #[error("marker must not contain `{0}`")]
    InvalidChar(char),
}

/// Delimiter between a name and its value, both in editor input and in the
/// persisted file format.
///
/// Invariant: exactly two characters, none of them whitespace, alphanumeric,
/// or part of a numeric literal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Marker(String);

impl Marker {
    pub fn new(value: impl Into<String>) -> Result<Self, MarkerError> {
        let value = value.into();
        let count = value.chars().count();
        if count != 2 {
            return Err(MarkerError::Length(count));
        }
        if let Some(bad) = value
            .chars()
            .find(|&c| c.is_whitespace() || c.is_alphanumeric() || is_numeric(c))
        {
            return Err(MarkerError::InvalidChar(bad));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Byte length of the marker text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `c` is one of the marker's characters.
    #[must_use]
    pub fn contains_char(&self, c: char) -> bool {
        self.0.contains(c)
    }

    /// Byte offset of the first full marker occurrence in `text`.
    #[must_use]
    pub fn find_in(&self, text: &str) -> Option<usize> {
        text.find(self.as_str())
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self(DEFAULT_MARKER.to_string())
    }
}

impl TryFrom<String> for Marker {
    type Error = MarkerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
