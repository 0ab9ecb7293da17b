//! Common test utilities for building decision graphs and sessions.
use triage::prelude::*;

/// Choices of the mild-fever walk through the built-in tree.
#[allow(dead_code)]
pub const MILD_FEVER_PATH: [&str; 4] = ["fever", "fever-low", "fever-low-duration", "fever-mild"];

/// Choices of the sudden-severe-headache walk through the built-in tree.
#[allow(dead_code)]
pub const HEAD_EMERGENCY_PATH: [&str; 4] = [
    "pain",
    "pain-head",
    "pain-head-severe",
    "pain-head-emergency",
];

#[allow(dead_code)]
pub fn builtin_store() -> DecisionGraphStore {
    DecisionGraphStore::builtin().expect("built-in tree must be valid")
}

/// Creates a small, valid graph for basic tests.
///
/// Shape: `start -> {cough, rash}`, `cough -> {cough-mild, cough-severe}`,
/// `rash -> cough-mild` (shared leaf).
#[allow(dead_code)]
pub fn create_small_definition() -> GraphDefinition {
    GraphDefinition::new(
        "start",
        vec![
            NodeDefinition::question("start", "What brings you here?", &["cough", "rash"]),
            NodeDefinition::question(
                "cough",
                "Is the cough getting worse?",
                &["cough-severe", "cough-mild"],
            ),
            NodeDefinition::question("rash", "Is the rash itchy?", &["cough-mild"]),
            NodeDefinition::outcome(
                "cough-mild",
                "This appears to be mild.",
                Severity::Mild,
                "Rest and monitor.",
                false,
            ),
            NodeDefinition::outcome(
                "cough-severe",
                "This needs attention.",
                Severity::Severe,
                "Seek immediate medical attention.",
                true,
            ),
        ],
    )
}

#[allow(dead_code)]
pub fn small_store() -> DecisionGraphStore {
    DecisionGraphStore::builder(create_small_definition())
        .build()
        .expect("small graph must be valid")
}

/// Walks a fresh guarded session through `choices`.
#[allow(dead_code)]
pub fn complete_session<'g>(
    store: &'g DecisionGraphStore,
    choices: &[&str],
) -> TraversalSession<'g> {
    TraversalSession::replay(store, choices).expect("choices must be valid")
}
