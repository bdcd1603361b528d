//! Name autocompletion against a registry.

use serde::Deserialize;

use crate::{EntryName, Registry};

/// How a partial name is matched against registry names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The candidate must be a prefix of the name.
    #[default]
    Prefix,
    /// The candidate may appear anywhere in the name.
    Substring,
}

impl MatchMode {
    #[must_use]
    pub fn matches(self, name: &str, candidate: &str) -> bool {
        match self {
            MatchMode::Prefix => name.starts_with(candidate),
            MatchMode::Substring => name.contains(candidate),
        }
    }
}

/// Outcome of resolving a candidate name.
///
/// Callers must handle all three cases; a mutation only proceeds on
/// [`Resolution::Unique`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Unique(EntryName),
    NoMatch,
    /// Two or more names matched; sorted by name.
    Ambiguous(Vec<EntryName>),
}

/// Resolve `candidate` against `registry`.
///
/// An exact match always wins. Otherwise every name accepted by `mode` is
/// collected and the count decides the outcome.
#[must_use]
pub fn resolve(registry: &Registry, candidate: &str, mode: MatchMode) -> Resolution {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return Resolution::NoMatch;
    }
    if let Some(exact) = registry.key(candidate) {
        return Resolution::Unique(exact.clone());
    }
    if mode == MatchMode::Prefix && !registry.find(candidate) {
        return Resolution::NoMatch;
    }

    let mut matches: Vec<EntryName> = registry
        .names()
        .filter(|name| mode.matches(name, candidate))
        .cloned()
        .collect();
    match matches.len() {
        0 => Resolution::NoMatch,
        1 => Resolution::Unique(matches.remove(0)),
        _ => Resolution::Ambiguous(matches),
    }
}
