//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use valman_core::{Editor, ExitReason, Session};
use valman_types::{EditorSettings, EntryName, Registry};

/// Build a registry from `(name, value)` pairs.
pub fn registry(entries: &[(&str, f64)]) -> Registry {
    entries
        .iter()
        .map(|(name, value)| (EntryName::new(*name).expect("valid name"), *value))
        .collect()
}

/// Session over `entries` with default settings.
pub fn session(entries: &[(&str, f64)]) -> Session {
    Session::with_registry(registry(entries), EditorSettings::default())
}

/// Drive the editor loop with `input` and capture everything it prints.
pub fn drive(session: Session, input: &str) -> (ExitReason, Session, String) {
    let mut editor = Editor::new(session, Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let reason = editor.run().expect("editor io");
    let (session, _, output) = editor.into_parts();
    (reason, session, String::from_utf8(output).expect("utf8 output"))
}

/// Write a registry file into `dir` and return its path.
pub fn write_file(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("write fixture");
    path
}
