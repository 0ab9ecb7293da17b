//! Tests for traversal sessions: advancing, retreating, resetting and completion.
mod common;
use common::*;
use pretty_assertions::assert_eq;
use triage::prelude::*;

#[test]
fn test_new_session_starts_at_root() {
    let store = builtin_store();
    let session = TraversalSession::new(&store);

    assert_eq!(session.state(), SessionState::Asking);
    assert!(session.path().is_empty());
    assert_eq!(session.current_node().id(), "root");
    assert_eq!(session.choices().len(), 6);
    assert!(session.outcome().is_none());
    assert_eq!(session.policy(), TransitionPolicy::Guarded);
}

#[test]
fn test_mild_fever_walk_completes() {
    let store = builtin_store();
    let mut session = TraversalSession::new(&store);

    for choice in MILD_FEVER_PATH {
        session.advance(choice).unwrap();
    }

    assert_eq!(session.state(), SessionState::Complete);
    assert_eq!(session.severity(), Some(Severity::Mild));
    assert_eq!(session.follow_up_required(), Some(false));
    assert_eq!(session.current_node().prompt(), "This appears to be a mild fever.");
    assert!(session.choices().is_empty());
}

#[test]
fn test_head_emergency_walk_completes() {
    let store = builtin_store();
    let session = complete_session(&store, &HEAD_EMERGENCY_PATH);

    assert!(session.is_complete());
    assert_eq!(session.severity(), Some(Severity::Severe));
    assert_eq!(session.follow_up_required(), Some(true));
    assert!(
        session
            .recommendation()
            .unwrap()
            .contains("Seek immediate medical attention")
    );
}

#[test]
fn test_retreat_from_complete_returns_to_question() {
    let store = builtin_store();
    let mut session = complete_session(&store, &MILD_FEVER_PATH);

    assert!(session.retreat());

    assert_eq!(session.state(), SessionState::Asking);
    assert_eq!(session.current_node().id(), "fever-low-duration");
    assert_eq!(session.path().len(), 3);
    assert!(session.outcome().is_none());
}

#[test]
fn test_retreat_is_left_inverse_of_advance() {
    let store = builtin_store();
    let mut session = TraversalSession::new(&store);
    let initial_node = session.current_node();

    for path in [&MILD_FEVER_PATH[..], &HEAD_EMERGENCY_PATH[..2], &["skin", "skin-severe"][..]] {
        for choice in path {
            session.advance(choice).unwrap();
        }
        for _ in path {
            assert!(session.retreat());
        }

        assert!(session.path().is_empty());
        assert_eq!(session.current_node(), initial_node);
        assert_eq!(session.state(), SessionState::Asking);
    }
}

#[test]
fn test_retreat_on_empty_path_is_noop() {
    let store = builtin_store();
    let mut session = TraversalSession::new(&store);

    assert!(!session.retreat());
    assert!(session.path().is_empty());
    assert_eq!(session.current_node().id(), "root");
}

#[test]
fn test_retreat_midway_resolves_previous_choice() {
    let store = builtin_store();
    let mut session = complete_session(&store, &["respiratory", "respiratory-severe"]);

    session.retreat();

    assert_eq!(session.current_node().id(), "respiratory");
    assert_eq!(session.path(), ["respiratory"]);
}

#[test]
fn test_reset_always_returns_to_root() {
    let store = builtin_store();

    for choices in [&[][..], &["digestive"][..], &MILD_FEVER_PATH[..]] {
        let mut session = complete_session(&store, choices);
        session.reset();

        assert!(session.path().is_empty());
        assert_eq!(session.state(), SessionState::Asking);
        assert_eq!(session.current_node(), store.root());
    }
}

#[test]
fn test_advance_after_complete_is_rejected() {
    let store = builtin_store();
    let mut session = complete_session(&store, &MILD_FEVER_PATH);

    let err = session.advance("fever").unwrap_err();

    assert_eq!(err, TransitionError::SessionComplete("fever-mild".to_string()));
    assert_eq!(session.path().len(), 4);
    assert!(session.is_complete());
}

#[test]
fn test_guarded_advance_rejects_unknown_and_foreign_choices() {
    let store = builtin_store();
    let mut session = complete_session(&store, &["fever"]);

    for bad in ["nonexistent-id", "pain", "root", "fever-mild"] {
        let err = session.advance(bad).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidChoice { .. }), "{}", bad);
        assert_eq!(session.path(), ["fever"]);
        assert_eq!(session.current_node().id(), "fever");
    }
}

#[test]
fn test_lenient_advance_reproduces_silent_reset() {
    let store = builtin_store();
    let mut session = TraversalSession::with_policy(&store, TransitionPolicy::Lenient);
    session.advance("pain").unwrap();

    session.advance("nonexistent-id").unwrap();

    assert_eq!(session.current_node().id(), "root");
    assert_eq!(session.path(), ["pain", "nonexistent-id"]);

    // Retreat still unwinds the recorded path
    session.retreat();
    assert_eq!(session.current_node().id(), "pain");
}

#[test]
fn test_lenient_advance_accepts_foreign_known_node() {
    let store = builtin_store();
    let mut session = TraversalSession::with_policy(&store, TransitionPolicy::Lenient);

    session.advance("skin-mild").unwrap();

    assert!(session.is_complete());
    assert_eq!(session.severity(), Some(Severity::Mild));
}

#[test]
fn test_replay_reports_first_invalid_choice() {
    let store = builtin_store();

    let err = TraversalSession::replay(&store, &["fever", "fever-high", "fever-mild"]).unwrap_err();

    assert_eq!(
        err,
        TransitionError::InvalidChoice {
            node_id: "fever-high".to_string(),
            choice_id: "fever-mild".to_string(),
        }
    );
}

#[test]
fn test_replay_with_lenient_policy_accepts_foreign_choice() {
    let store = builtin_store();
    let choices = ["fever", "nonexistent-id", "skin"];

    let session =
        TraversalSession::replay_with_policy(&store, TransitionPolicy::Lenient, &choices).unwrap();

    assert_eq!(session.policy(), TransitionPolicy::Lenient);
    assert_eq!(session.path(), choices);
    assert_eq!(session.current_node().id(), "skin");

    // The same walk under the default policy stops at the foreign choice
    let err = TraversalSession::replay_with_policy(&store, TransitionPolicy::Guarded, &choices)
        .unwrap_err();
    assert!(matches!(err, TransitionError::InvalidChoice { .. }));
}

#[test]
fn test_complete_sessions_always_expose_outcome() {
    let store = builtin_store();

    // Walk every root-to-leaf path of the built-in tree
    let mut stack: Vec<Vec<String>> = vec![Vec::new()];
    let mut leaves = 0;
    while let Some(path) = stack.pop() {
        let session = TraversalSession::replay(&store, &path).unwrap();
        if session.is_complete() {
            leaves += 1;
            assert!(session.current_node().is_terminal());
            assert!(session.severity().is_some());
            assert!(session.recommendation().is_some());
            assert!(session.follow_up_required().is_some());
            continue;
        }
        for choice in session.choices() {
            let mut next = path.clone();
            next.push(choice.id().to_string());
            stack.push(next);
        }
    }
    assert!(leaves > 27, "shared subtrees are reached through several paths");
}

#[test]
fn test_sessions_share_one_store() {
    let store = builtin_store();
    let mut first = TraversalSession::new(&store);
    let mut second = TraversalSession::new(&store);

    first.advance("skin").unwrap();
    second.advance("other").unwrap();

    assert_eq!(first.current_node().id(), "skin");
    assert_eq!(second.current_node().id(), "other");
}

#[test]
fn test_small_graph_shared_leaf() {
    let store = small_store();

    let via_cough = complete_session(&store, &["cough", "cough-mild"]);
    let via_rash = complete_session(&store, &["rash", "cough-mild"]);

    assert_eq!(via_cough.outcome(), via_rash.outcome());
    assert_ne!(via_cough.path(), via_rash.path());
}
