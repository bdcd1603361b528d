//! Editing session: registry, cursor, and command dispatch.
//!
//! [`Session::execute`] runs one line to completion and returns what should be
//! echoed. The session owns the cursor (the most recently touched entry) and
//! keeps it pointing at a live entry: every path that can remove entries
//! clears it when needed.

use std::fmt;
use std::path::{Path, PathBuf};

use valman_types::{
    Assignment, Command, EditorSettings, EntryName, ParseError, Registry, Resolution, Verb,
    parse_line, resolve,
};

use crate::commands::help_text;
use crate::errors::EditorError;
use crate::persistence::{self, LoadReport, OpenOutcome, PersistenceError};

/// What a successfully executed line produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// An entry was selected or changed; echo its current value.
    Value { name: EntryName, value: f64 },
    Listing(Vec<(EntryName, f64)>),
    Help(String),
    Erased { name: EntryName },
    Stored { path: PathBuf, count: usize },
    Loaded { path: PathBuf, report: LoadReport },
    Cleared { count: usize },
    Nothing,
    Quit,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Value { name, value } => write!(f, "{name} = {value}"),
            Response::Listing(entries) if entries.is_empty() => f.write_str("(empty)"),
            Response::Listing(entries) => {
                for (i, (name, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{name} = {value}")?;
                }
                Ok(())
            }
            Response::Help(text) => f.write_str(text),
            Response::Erased { name } => write!(f, "erased {name}"),
            Response::Stored { path, count } => {
                write!(f, "stored {} to {}", plural(*count, "entry"), path.display())
            }
            Response::Loaded { path, report } => {
                write!(
                    f,
                    "loaded {} from {}",
                    plural(report.loaded, "entry"),
                    path.display()
                )?;
                if report.skipped > 0 {
                    write!(f, " ({} skipped)", plural(report.skipped, "line"))?;
                }
                Ok(())
            }
            Response::Cleared { count } => write!(f, "cleared {}", plural(*count, "entry")),
            Response::Nothing | Response::Quit => Ok(()),
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {noun}"),
        (_, "entry") => format!("{count} entries"),
        _ => format!("{count} {noun}s"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Transform {
    Sqrt,
    Pow(f64),
}

impl Transform {
    fn apply(self, value: f64) -> f64 {
        match self {
            Transform::Sqrt => value.sqrt(),
            Transform::Pow(exponent) => value.powf(exponent),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Transform::Sqrt => "sqrt",
            Transform::Pow(_) => "pow",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    registry: Registry,
    cursor: Option<EntryName>,
    settings: EditorSettings,
    backing_file: Option<PathBuf>,
}

impl Session {
    #[must_use]
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Start from an existing registry.
    #[must_use]
    pub fn with_registry(registry: Registry, settings: EditorSettings) -> Self {
        Self {
            registry,
            settings,
            ..Self::default()
        }
    }

    /// Open `path` as the backing file. A missing file starts an empty
    /// registry and reports [`OpenOutcome::Created`].
    pub fn open(
        path: impl Into<PathBuf>,
        settings: EditorSettings,
    ) -> Result<(Self, OpenOutcome), PersistenceError> {
        let path = path.into();
        let (registry, outcome) = persistence::open(&path, settings.marker())?;
        let session = Self {
            registry,
            cursor: None,
            settings,
            backing_file: Some(path),
        };
        Ok((session, outcome))
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Lenient access: creates a zero-valued entry when absent.
    pub fn value_mut(&mut self, name: &EntryName) -> &mut f64 {
        self.registry.value_mut(name)
    }

    #[must_use]
    pub fn cursor(&self) -> Option<&EntryName> {
        self.cursor.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    #[must_use]
    pub fn backing_file(&self) -> Option<&Path> {
        self.backing_file.as_deref()
    }

    /// Parse and run one line.
    pub fn execute(&mut self, line: &str) -> Result<Response, EditorError> {
        let command = parse_line(line, self.settings.marker())?;
        tracing::debug!(?command, "Executing command");
        self.run(command)
    }

    pub fn run(&mut self, command: Command) -> Result<Response, EditorError> {
        match command {
            Command::Empty => Ok(Response::Nothing),
            Command::Navigate(candidate) => self.navigate(&candidate),
            Command::Assign(assignment) => self.assign(assignment),
            Command::Verb(verb) => self.run_verb(verb),
        }
    }

    fn run_verb(&mut self, verb: Verb) -> Result<Response, EditorError> {
        match verb {
            Verb::List => Ok(self.list()),
            Verb::Help => Ok(Response::Help(help_text(self.settings.marker()))),
            Verb::Add(assignment) => self.add(assignment),
            Verb::Erase(candidate) => self.erase(&candidate),
            Verb::Store(path) => self.store(path),
            Verb::Load(path) => self.load(path),
            Verb::Sqrt(target) => self.transform(target.as_deref(), Transform::Sqrt),
            Verb::Pow { target, exponent } => {
                self.transform(target.as_deref(), Transform::Pow(exponent))
            }
            Verb::Clear => Ok(self.clear()),
            Verb::Quit => Ok(Response::Quit),
        }
    }

    #[must_use]
    pub fn list(&self) -> Response {
        Response::Listing(
            self.registry
                .iter()
                .map(|(name, value)| (name.clone(), value))
                .collect(),
        )
    }

    /// Select an entry. Never creates one.
    pub fn navigate(&mut self, candidate: &str) -> Result<Response, EditorError> {
        let name = self.resolve(candidate)?;
        Ok(self.touch(name))
    }

    /// Assign to an existing entry; unknown names are an error.
    pub fn assign(&mut self, assignment: Assignment) -> Result<Response, EditorError> {
        let name = self.resolve(&assignment.target)?;
        self.registry.add(name.clone(), assignment.value);
        Ok(self.touch(name))
    }

    /// Insert or overwrite under the exact name given.
    pub fn add(&mut self, assignment: Assignment) -> Result<Response, EditorError> {
        let name = EntryName::new(assignment.target).map_err(ParseError::from)?;
        self.registry.add(name.clone(), assignment.value);
        Ok(self.touch(name))
    }

    pub fn erase(&mut self, candidate: &str) -> Result<Response, EditorError> {
        let name = self.resolve(candidate)?;
        self.registry.erase(&name);
        if self.cursor.as_ref() == Some(&name) {
            self.cursor = None;
        }
        Ok(Response::Erased { name })
    }

    pub fn clear(&mut self) -> Response {
        let count = self.registry.len();
        self.registry.clear();
        self.cursor = None;
        Response::Cleared { count }
    }

    pub fn sqrt(&mut self, target: Option<&str>) -> Result<Response, EditorError> {
        self.transform(target, Transform::Sqrt)
    }

    /// Raise the named entry (or the cursor entry) to `exponent`.
    pub fn pow(&mut self, target: Option<&str>, exponent: f64) -> Result<Response, EditorError> {
        self.transform(target, Transform::Pow(exponent))
    }

    /// Write the registry to `path`, or to the backing file when `None`.
    pub fn store(&mut self, path: Option<PathBuf>) -> Result<Response, EditorError> {
        let path = self.file_argument(path, "store")?;
        let count = persistence::store(&self.registry, &path, self.settings.marker())?;
        self.backing_file = Some(path.clone());
        Ok(Response::Stored { path, count })
    }

    /// Merge entries from `path`, or from the backing file when `None`.
    pub fn load(&mut self, path: Option<PathBuf>) -> Result<Response, EditorError> {
        let path = self.file_argument(path, "load")?;
        let report = persistence::load_into(&mut self.registry, &path, self.settings.marker())?;
        self.backing_file = Some(path.clone());
        Ok(Response::Loaded { path, report })
    }

    fn transform(
        &mut self,
        target: Option<&str>,
        transform: Transform,
    ) -> Result<Response, EditorError> {
        let name = match target {
            Some(candidate) => self.resolve(candidate)?,
            None => self.cursor.clone().ok_or(EditorError::NoTarget)?,
        };
        let current = self.registry.get(&name).ok_or(EditorError::NoTarget)?;
        let result = transform.apply(current);
        if !result.is_finite() {
            return Err(EditorError::NonFiniteResult {
                op: transform.name(),
                name,
                value: current,
            });
        }
        self.registry.add(name.clone(), result);
        Ok(self.touch(name))
    }

    /// Strict resolve-for-mutation path.
    fn resolve(&self, candidate: &str) -> Result<EntryName, EditorError> {
        match resolve(&self.registry, candidate, self.settings.matching()) {
            Resolution::Unique(name) => Ok(name),
            Resolution::NoMatch => Err(EditorError::UnresolvedEntry {
                candidate: candidate.trim().to_string(),
            }),
            Resolution::Ambiguous(candidates) => Err(EditorError::AmbiguousEntry {
                candidate: candidate.trim().to_string(),
                candidates,
            }),
        }
    }

    fn touch(&mut self, name: EntryName) -> Response {
        let value = self.registry.get(&name).unwrap_or_default();
        self.cursor = Some(name.clone());
        Response::Value { name, value }
    }

    fn file_argument(
        &self,
        path: Option<PathBuf>,
        verb: &'static str,
    ) -> Result<PathBuf, EditorError> {
        path.or_else(|| self.backing_file.clone()).ok_or_else(|| {
            EditorError::MalformedCommand(ParseError::MissingArgument {
                verb,
                expected: "a file name",
            })
        })
    }
}
