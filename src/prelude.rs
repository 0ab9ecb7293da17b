//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the triage crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use triage::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let store = DecisionGraphStore::builtin()?;
//! let session = TraversalSession::replay(&store, &["pain", "pain-head"])?;
//! for choice in session.choices() {
//!     println!("- {}", choice.prompt());
//! }
//! # Ok(())
//! # }
//! ```

// Graph definition and construction
pub use crate::definition::{GraphArtifact, GraphDefinition, IntoGraph, NodeDefinition};
pub use crate::graph::{DecisionGraphStore, DecisionNode, GraphBuilder, Outcome, Severity};

// Traversal
pub use crate::session::{SessionState, TransitionPolicy, TraversalSession};

// Records and history
pub use crate::record::{
    AssessmentRecord, HistoryStore, JsonFileHistory, MemoryHistory, ResultPersistenceBridge,
};
pub use crate::summary::{HistorySummary, PathFormatter};

// Configuration
pub use crate::config::TriageConfig;

// Error types
pub use crate::error::{
    ArtifactError, ConfigError, GraphBuildError, GraphConversionError, HistoryError, SaveError,
    TransitionError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
