//! Core logic for Valman.
//!
//! - [`Session`]: registry + cursor + command dispatch, one line at a time
//! - [`Editor`]: the read/execute/print loop over any reader and writer
//! - [`persistence`]: the line-oriented registry file format
//! - [`commands`]: command table and help text

pub mod commands;
mod editor;
pub mod errors;
pub mod persistence;
mod session;

pub use commands::{CommandSpec, command_specs, help_text};
pub use editor::{Editor, ExitReason, Flow};
pub use errors::{EditorError, ErrorKind};
pub use persistence::{LoadReport, OpenOutcome, PersistenceError};
pub use session::{Response, Session};
