use thiserror::Error;

/// Errors that can occur while building a `DecisionGraphStore` from a definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphBuildError {
    #[error("Node '{0}' is defined more than once")]
    DuplicateNode(String),

    #[error("Root node '{0}' not found in the graph definition")]
    RootNotFound(String),

    #[error("Node '{missing_node_id}' not found, which is referenced as a child of '{parent_id}'")]
    DanglingEdge {
        missing_node_id: String,
        parent_id: String,
    },

    #[error("Leaf node '{node_id}' is missing its outcome field '{field}'")]
    MissingOutcome { node_id: String, field: &'static str },

    #[error("Node '{0}' has children but also carries outcome fields")]
    OutcomeOnBranch(String),

    #[error("Cycle detected: edge from '{from}' leads back to its ancestor '{to}'")]
    Cycle { from: String, to: String },
}

/// Errors that can occur when converting a custom tree format into a `GraphDefinition`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphConversionError {
    #[error("Unknown severity '{0}', expected one of: mild, moderate, severe")]
    UnknownSeverity(String),

    #[error("Invalid tree data: {0}")]
    ValidationError(String),
}

/// Errors raised when a traversal session is asked to make an illegal move.
///
/// A rejected transition never changes the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Choice '{choice_id}' is not an option of node '{node_id}'")]
    InvalidChoice { node_id: String, choice_id: String },

    #[error("Assessment already complete at node '{0}'; retreat or reset before advancing")]
    SessionComplete(String),
}

/// Errors that can occur when turning a session into an `AssessmentRecord`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("Cannot save an incomplete assessment: node '{current_node_id}' is still asking")]
    InvalidState { current_node_id: String },
}

/// Errors raised by the history stores.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History I/O failed for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("History serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while saving or loading a compiled graph artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact I/O failed for '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Artifact encoding failed: {0}")]
    Encode(String),

    #[error("Artifact decoding failed: {0}")]
    Decode(String),

    #[error("Artifact contains an invalid graph: {0}")]
    InvalidGraph(#[from] GraphBuildError),
}

/// Errors raised while loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {message}")]
    InvalidValue {
        key: &'static str,
        value: String,
        message: &'static str,
    },
}
