//! The name → value registry.

use std::collections::BTreeMap;

use crate::{EntryName, Marker, ParseError, parse_assignment};

/// Named scalar values, ordered by name.
///
/// [`Registry::value_mut`] is lenient and fabricates a zero-valued entry.
/// Mutation-by-name in the editor goes through [`crate::resolve`], which can
/// fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    entries: BTreeMap<EntryName, f64>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous value, if any.
    pub fn add(&mut self, name: EntryName, value: f64) -> Option<f64> {
        self.entries.insert(name, value)
    }

    /// Parse `name<marker>value` and add the result.
    pub fn add_line(&mut self, line: &str, marker: &Marker) -> Result<EntryName, ParseError> {
        let assignment = parse_assignment(line, marker)?;
        let name = EntryName::new(assignment.target)?;
        self.add(name.clone(), assignment.value);
        Ok(name)
    }

    /// Remove `name` if present. Returns the removed value.
    pub fn erase(&mut self, name: &str) -> Option<f64> {
        self.entries.remove(name)
    }

    /// True if at least one name starts with `text`.
    #[must_use]
    pub fn find(&self, text: &str) -> bool {
        self.entries.keys().any(|name| name.starts_with(text))
    }

    /// Mutable access that creates a zero-valued entry when `name` is absent.
    pub fn value_mut(&mut self, name: &EntryName) -> &mut f64 {
        self.entries.entry(name.clone()).or_insert(0.0)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    /// The stored key equal to `name`.
    #[must_use]
    pub fn key(&self, name: &str) -> Option<&EntryName> {
        self.entries.get_key_value(name).map(|(key, _)| key)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntryName, f64)> {
        self.entries.iter().map(|(name, value)| (name, *value))
    }

    pub fn names(&self) -> impl Iterator<Item = &EntryName> {
        self.entries.keys()
    }
}

impl FromIterator<(EntryName, f64)> for Registry {
    fn from_iter<I: IntoIterator<Item = (EntryName, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(EntryName, f64)> for Registry {
    fn extend<I: IntoIterator<Item = (EntryName, f64)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
