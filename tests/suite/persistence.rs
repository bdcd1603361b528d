//! Registry file tests through the editor

use std::fs;

use valman_core::{ErrorKind, OpenOutcome, Session};
use valman_types::EditorSettings;

use crate::common::{drive, session, write_file};

#[test]
fn open_existing_file_loads_entries() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_file(dir.path(), "values.txt", "gain||0.75\noffset||-3\n");

    let (session, outcome) = Session::open(&path, EditorSettings::default()).expect("open");

    assert!(matches!(outcome, OpenOutcome::Opened(report) if report.loaded == 2));
    assert_eq!(session.registry().get("gain"), Some(0.75));
    assert_eq!(session.registry().get("offset"), Some(-3.0));
    assert_eq!(session.backing_file(), Some(path.as_path()));
}

#[test]
fn store_without_argument_writes_backing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("values.txt");

    let (opened, outcome) = Session::open(&path, EditorSettings::default()).expect("open");
    assert_eq!(outcome, OpenOutcome::Created);

    let (_, _, output) = drive(opened, "add b || 2\nadd a || 0.1\nstore\n");

    assert!(output.contains("stored 2 entries"));
    assert_eq!(fs::read_to_string(&path).expect("read"), "a||0.1\nb||2\n");
}

#[test]
fn store_then_load_in_new_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("saved.txt");
    let input = format!(
        "add third || 0.3333333333333333\nadd big || 12345678.9\nstore {}\n",
        path.display()
    );
    let (_, first, _) = drive(session(&[("neg", -0.5)]), &input);

    let (_, second, output) = drive(Session::default(), &format!("load {}\n", path.display()));

    assert!(output.contains("loaded 3 entries"));
    assert_eq!(second.registry(), first.registry());
}

#[test]
fn malformed_line_is_skipped_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "values.txt",
        "a||1\nb||2\nthis line is broken\nc||3\n",
    );

    let (_, session, output) = drive(Session::default(), &format!("load {}\n", path.display()));

    assert!(output.contains("loaded 3 entries"));
    assert!(output.contains("(1 line skipped)"));
    assert_eq!(session.registry().len(), 3);
}

#[test]
fn load_missing_file_keeps_registry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.txt");
    let mut session = session(&[("keep", 1.0)]);

    let err = session
        .execute(&format!("load {}", path.display()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert_eq!(session.registry().get("keep"), Some(1.0));
}

#[test]
fn store_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no-such-dir").join("values.txt");
    let mut session = session(&[("a", 1.0)]);

    let err = session
        .execute(&format!("store {}", path.display()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FileWriteFailure);
    assert!(!path.exists());
}

#[test]
fn store_without_backing_file_needs_argument() {
    let mut session = session(&[("a", 1.0)]);
    let err = session.execute("store").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedCommand);
}

#[test]
fn store_onto_directory_fails_without_moving_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("data");
    fs::create_dir(&target).expect("mkdir");
    let user_file = write_file(dir.path(), "data.bak", "mine");
    let mut session = session(&[("a", 1.0)]);

    let err = session
        .execute(&format!("store {}", target.display()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FileWriteFailure);
    assert!(target.is_dir());
    assert_eq!(fs::read_to_string(&user_file).expect("read"), "mine");
}

#[test]
fn file_with_undecodable_line_still_opens() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("values.txt");
    fs::write(&path, b"a||1\nb||2\n\xff\xfe||9\nd||4\n").expect("write fixture");

    let (session, outcome) = Session::open(&path, EditorSettings::default()).expect("open");

    assert!(matches!(
        outcome,
        OpenOutcome::Opened(report) if report.loaded == 3 && report.skipped == 1
    ));
    assert_eq!(session.registry().len(), 3);
}

#[test]
fn overflowing_value_never_reaches_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("values.txt");
    let input = format!("x || {}\nstore {}\n", "9".repeat(400), path.display());

    let (_, session, output) = drive(session(&[("x", 1.0)]), &input);

    assert!(output.contains("is not a number"));
    assert_eq!(session.registry().get("x"), Some(1.0));
    assert_eq!(fs::read_to_string(&path).expect("read"), "x||1\n");
}
