//! End-to-end editor sessions

use valman_core::{ExitReason, Session};
use valman_types::{EditorSettings, EntryName, Marker};

use crate::common::{drive, session};

#[test]
fn typical_session() {
    let input = "\
add speed || 10
add spin || 2
spe || 12.5
spi
pow 3
list
quit
";
    let (reason, session, output) = drive(Session::default(), input);

    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(session.registry().get("speed"), Some(12.5));
    assert_eq!(session.registry().get("spin"), Some(8.0));
    assert_eq!(session.cursor().map(EntryName::as_str), Some("spin"));
    assert!(output.contains("speed = 12.5\nspin = 8\n"));
}

#[test]
fn ambiguous_navigation_lists_candidates() {
    let (_, session, output) = drive(session(&[("alpha", 1.0), ("alice", 2.0)]), "al\n");
    assert!(output.contains("error: `al` is ambiguous: alice, alpha"));
    assert!(session.cursor().is_none());
}

#[test]
fn ambiguous_assignment_leaves_entries_unchanged() {
    let (_, session, output) = drive(session(&[("alpha", 1.0), ("alice", 2.0)]), "al || 5\n");
    assert!(output.contains("ambiguous"));
    assert_eq!(session.registry().get("alpha"), Some(1.0));
    assert_eq!(session.registry().get("alice"), Some(2.0));
}

#[test]
fn erased_cursor_entry_is_never_stale() {
    let input = "target\nerase target\ntarget\nsqrt\n";
    let (_, session, output) = drive(session(&[("target", 9.0)]), input);

    assert!(session.cursor().is_none());
    assert!(output.contains("erased target"));
    assert!(output.contains("error: no entry matches `target`"));
    assert!(output.contains("error: no target"));
    assert!(!output.contains("target = 3"));
}

#[test]
fn malformed_lines_are_reported_and_ignored() {
    let input = "x || \nx || 1.2.3\n|| 4\nx\n";
    let (reason, session, output) = drive(session(&[("x", 1.0)]), input);

    assert_eq!(reason, ExitReason::EndOfInput);
    assert_eq!(output.matches("error: parse error").count(), 3);
    assert!(output.contains("x = 1"));
    assert_eq!(session.registry().get("x"), Some(1.0));
}

#[test]
fn help_lists_verbs() {
    let (_, _, output) = drive(Session::default(), "help\n");
    for verb in ["list", "add", "erase", "store", "load", "sqrt", "pow", "clear", "quit"] {
        assert!(output.contains(verb), "help is missing {verb}");
    }
}

#[test]
fn custom_marker_session() {
    let settings = EditorSettings::default().with_marker(Marker::new(":=").unwrap());
    let (_, session, _) = drive(Session::new(settings), "add rate := 0.5\nrate := := 0.75\n");
    assert_eq!(session.registry().get("rate"), Some(0.75));
}

#[test]
fn end_of_input_does_not_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("values.txt");

    let (opened, _) = Session::open(&path, EditorSettings::default()).expect("open");
    let (reason, _, _) = drive(opened, "add a || 1\n");

    assert_eq!(reason, ExitReason::EndOfInput);
    assert!(!path.exists());
}
