//! # Triage - Symptom-Assessment Decision Engine
//!
//! **Triage** turns a sequence of answers into a triage outcome: a severity, a
//! recommendation and whether follow-up care is advised. Answers walk a static,
//! validated decision graph one edge at a time, and a completed walk can be shaped
//! into an immutable record for the caller to keep.
//!
//! ## Core Workflow
//!
//! 1.  **Define the Graph**: Use the built-in symptom tree, or convert your own tree
//!     format into a `GraphDefinition` by implementing the `IntoGraph` trait.
//! 2.  **Build the Store**: `DecisionGraphStore::builder(definition).build()` checks that
//!     every child exists, every leaf carries an outcome and there are no cycles.
//! 3.  **Walk a Session**: Create a `TraversalSession` over the store and drive it with
//!     `advance`, `retreat` and `reset` as the user answers.
//! 4.  **Save the Result**: Once the session is complete, `ResultPersistenceBridge::save`
//!     produces an `AssessmentRecord` that can be appended to any `HistoryStore`.
//!
//! Unknown node ids are never an error at the store level: `get_node` falls back to
//! the root, which sends a user holding a stale id back to the first question.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use triage::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let store = DecisionGraphStore::builtin()?;
//!     let mut session = TraversalSession::new(&store);
//!
//!     println!("{}", session.current_node().prompt());
//!     for choice in ["fever", "fever-low", "fever-low-duration", "fever-mild"] {
//!         session.advance(choice)?;
//!     }
//!
//!     assert_eq!(session.state(), SessionState::Complete);
//!     println!("Severity: {:?}", session.severity());
//!
//!     let record = ResultPersistenceBridge::new()
//!         .save(&session, Some("Started after a cold".to_string()))?;
//!
//!     let mut history = MemoryHistory::new();
//!     history.append_record(record)?;
//!
//!     let summary = HistorySummary::from_records(&history.list_records()?);
//!     println!("{}", summary.headline());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod definition;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod record;
pub mod session;
pub mod summary;
