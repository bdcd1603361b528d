//! Registry and completion invariants

use valman_core::{ErrorKind, Session};
use valman_types::{EditorSettings, EntryName, MatchMode, Registry, Resolution, resolve};

use crate::common::{registry, session};

fn name(raw: &str) -> EntryName {
    EntryName::new(raw).expect("valid name")
}

#[test]
fn add_then_read_via_editor() {
    let mut session = Session::default();
    for (i, value) in [0.0, -7.25, 1e-12, 6.02e23, 42.0].into_iter().enumerate() {
        session.execute(&format!("add v{i} || {value}")).expect("add");
        assert_eq!(session.registry().get(&format!("v{i}")), Some(value));
    }
}

#[test]
fn resolve_is_deterministic() {
    let registry = registry(&[("alpha", 1.0), ("alpine", 2.0), ("beta", 3.0)]);
    for candidate in ["al", "alp", "b", "z", "alpha"] {
        let first = resolve(&registry, candidate, MatchMode::Prefix);
        for _ in 0..5 {
            assert_eq!(resolve(&registry, candidate, MatchMode::Prefix), first);
        }
    }
}

#[test]
fn resolution_variants() {
    let registry = registry(&[("alpha", 1.0), ("alpine", 2.0), ("beta", 3.0)]);

    assert_eq!(
        resolve(&registry, "b", MatchMode::Prefix),
        Resolution::Unique(name("beta"))
    );
    assert_eq!(resolve(&registry, "gamma", MatchMode::Prefix), Resolution::NoMatch);
    assert_eq!(
        resolve(&registry, "alp", MatchMode::Prefix),
        Resolution::Ambiguous(vec![name("alpha"), name("alpine")])
    );
}

#[test]
fn substring_mode_from_settings() {
    let settings = EditorSettings::default().with_matching(MatchMode::Substring);
    let entries = registry(&[("max_speed", 10.0), ("min_gap", 1.0)]);
    let mut session = Session::with_registry(entries, settings);

    session.execute("speed || 11").expect("assign");
    assert_eq!(session.registry().get("max_speed"), Some(11.0));

    let err = session.execute("m").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AmbiguousEntry);
}

#[test]
fn cursor_never_points_at_missing_entry() {
    let mut session = session(&[("a", 4.0), ("b", 9.0)]);
    let lines = ["a", "erase b", "sqrt", "b", "add b || 1", "clear", "sqrt", "a"];
    for line in lines {
        let _ = session.execute(line);
        if let Some(cursor) = session.cursor() {
            assert!(session.registry().contains(cursor), "stale cursor after `{line}`");
        }
    }
    assert!(session.cursor().is_none());
    assert!(session.registry().is_empty());
}

#[test]
fn non_finite_results_are_refused() {
    let mut session = session(&[("neg", -4.0), ("zero", 0.0)]);

    for line in ["sqrt neg", "pow zero -1"] {
        let err = session.execute(line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NonFiniteResult);
    }
    assert_eq!(session.registry().get("neg"), Some(-4.0));
    assert_eq!(session.registry().get("zero"), Some(0.0));
}

#[test]
fn value_mut_fabricates_zero_entry() {
    let mut session = Session::with_registry(Registry::new(), EditorSettings::default());
    *session.value_mut(&name("fresh")) += 2.5;
    assert_eq!(session.registry().get("fresh"), Some(2.5));
}
