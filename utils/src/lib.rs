//! Shared infrastructure utilities for Valman.
//!
//! These are the two file collaborators the registry consumes:
//!
//! - **`text_file`**: read a whole file as text or bytes, write text to a file
//! - **`atomic_write`**: crash-safe file replacement (temp + rename)

pub mod atomic_write;
pub mod text_file;

pub use atomic_write::{AtomicWriteOptions, FileSyncPolicy, atomic_write, atomic_write_with_options};
pub use text_file::{read_file_bytes, read_text_file, write_text_file};
