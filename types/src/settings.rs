//! Resolved editor settings shared across crates.
//!
//! Raw TOML tables have optional fields; they are resolved into
//! [`EditorSettings`] at the deserialization boundary, so a value of this
//! type always carries a valid marker.

use serde::Deserialize;

use crate::{Marker, MarkerError, MatchMode};

pub const DEFAULT_PROMPT: &str = "> ";

#[derive(Deserialize)]
struct RawEditorSettings {
    #[serde(default)]
    marker: Option<String>,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    matching: Option<MatchMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEditorSettings")]
pub struct EditorSettings {
    marker: Marker,
    prompt: String,
    matching: MatchMode,
}

impl TryFrom<RawEditorSettings> for EditorSettings {
    type Error = MarkerError;

    fn try_from(raw: RawEditorSettings) -> Result<Self, Self::Error> {
        let marker = match raw.marker {
            Some(marker) => Marker::new(marker)?,
            None => Marker::default(),
        };
        Ok(Self {
            marker,
            prompt: raw.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            matching: raw.matching.unwrap_or_default(),
        })
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            marker: Marker::default(),
            prompt: DEFAULT_PROMPT.to_string(),
            matching: MatchMode::default(),
        }
    }
}

impl EditorSettings {
    #[must_use]
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn matching(&self) -> MatchMode {
        self.matching
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn with_matching(mut self, matching: MatchMode) -> Self {
        self.matching = matching;
        self
    }
}
