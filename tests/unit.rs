//! Unit tests for core Triage functionality.
mod common;
use common::*;
use std::str::FromStr;
use triage::prelude::*;

#[test]
fn test_severity_display() {
    assert_eq!(format!("{}", Severity::Mild), "mild");
    assert_eq!(format!("{}", Severity::Moderate), "moderate");
    assert_eq!(format!("{}", Severity::Severe), "severe");
}

#[test]
fn test_severity_from_str() {
    assert_eq!(Severity::from_str("mild").unwrap(), Severity::Mild);
    assert_eq!(Severity::from_str(" Moderate ").unwrap(), Severity::Moderate);
    assert_eq!(Severity::from_str("SEVERE").unwrap(), Severity::Severe);
    assert_eq!(
        Severity::from_str("urgent").unwrap_err(),
        GraphConversionError::UnknownSeverity("urgent".to_string())
    );
}

#[test]
fn test_severity_ordering() {
    assert!(Severity::Mild < Severity::Moderate);
    assert!(Severity::Moderate < Severity::Severe);
    assert_eq!(Severity::ALL.iter().max(), Some(&Severity::Severe));
}

#[test]
fn test_path_formatter_ids() {
    assert_eq!(
        PathFormatter::format_ids(&MILD_FEVER_PATH),
        "fever > fever-low > fever-low-duration > fever-mild"
    );
    assert_eq!(PathFormatter::format_ids(&["skin"]), "skin");

    let empty: [&str; 0] = [];
    assert_eq!(PathFormatter::format_ids(&empty), "(no choices)");
}

#[test]
fn test_path_formatter_prompts_keep_unknown_ids() {
    let store = small_store();

    let formatted = PathFormatter::format_prompts(&store, &["rash", "gone"]);

    assert_eq!(formatted, "1. Is the rash itchy?\n2. gone");
}

#[test]
fn test_path_formatter_record() {
    let store = builtin_store();
    let session = complete_session(&store, &HEAD_EMERGENCY_PATH);
    let record = ResultPersistenceBridge::new().save(&session, None).unwrap();

    let formatted = PathFormatter::format_record(&record);

    assert!(formatted.contains("severe"));
    assert!(formatted.contains("pain > pain-head > pain-head-severe > pain-head-emergency"));
    assert!(formatted.contains("follow-up recommended"));

    let mild = complete_session(&store, &MILD_FEVER_PATH);
    let record = ResultPersistenceBridge::new().save(&mild, None).unwrap();
    assert!(!PathFormatter::format_record(&record).contains("follow-up"));
}

#[test]
fn test_error_display() {
    let err = GraphBuildError::DanglingEdge {
        missing_node_id: "node_B".to_string(),
        parent_id: "node_A".to_string(),
    };
    assert!(err.to_string().contains("node_B"));
    assert!(err.to_string().contains("node_A"));

    let missing = GraphBuildError::MissingOutcome {
        node_id: "leaf".to_string(),
        field: "followUpRequired",
    };
    assert!(missing.to_string().contains("followUpRequired"));

    let transition = TransitionError::InvalidChoice {
        node_id: "fever".to_string(),
        choice_id: "pain-head".to_string(),
    };
    assert!(transition.to_string().contains("pain-head"));
    assert!(transition.to_string().contains("fever"));

    let save = SaveError::InvalidState {
        current_node_id: "root".to_string(),
    };
    assert!(save.to_string().contains("incomplete"));

    let config = ConfigError::InvalidValue {
        key: "TRIAGE_TRANSITION_POLICY",
        value: "strict".to_string(),
        message: "expected 'guarded' or 'lenient'",
    };
    assert!(config.to_string().contains("TRIAGE_TRANSITION_POLICY"));
}

#[test]
fn test_artifact_error_wraps_build_error() {
    let err: ArtifactError = GraphBuildError::RootNotFound("begin".to_string()).into();

    assert!(matches!(err, ArtifactError::InvalidGraph(_)));
    assert!(err.to_string().contains("begin"));
}

#[test]
fn test_node_outcome_accessors() {
    let store = small_store();

    let leaf = store.get_node("cough-severe");
    let outcome = leaf.outcome().unwrap();
    assert_eq!(outcome.severity, Severity::Severe);
    assert!(outcome.follow_up_required);

    let branch = store.get_node("cough");
    assert!(!branch.is_terminal());
    assert!(branch.has_child("cough-mild"));
    assert!(!branch.has_child("rash"));
    assert_eq!(branch.severity(), None);
}
