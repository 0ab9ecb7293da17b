//! Completed assessments and the bridge that produces them.

use crate::error::SaveError;
use crate::graph::Severity;
use crate::session::TraversalSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

mod history;

pub use history::{DEFAULT_NAMESPACE, HistoryStore, JsonFileHistory, MemoryHistory};

/// An immutable snapshot of one completed assessment.
///
/// Field names serialize in camelCase and accept the `symptoms` / `timestamp`
/// names used by older history files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    id: String,
    #[serde(with = "chrono::serde::ts_milliseconds", alias = "timestamp")]
    created_at: DateTime<Utc>,
    #[serde(alias = "symptoms")]
    path: Vec<String>,
    severity: Severity,
    recommendation: String,
    follow_up_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl AssessmentRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The choices that led to the outcome, in the order they were made.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn follow_up_required(&self) -> bool {
        self.follow_up_required
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Shapes completed sessions into `AssessmentRecord`s.
///
/// The bridge never touches storage; appending the record to a `HistoryStore` is
/// left to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultPersistenceBridge;

impl ResultPersistenceBridge {
    pub fn new() -> Self {
        Self
    }

    /// Builds a record from a `Complete` session.
    ///
    /// Notes are stored verbatim. Fails with `SaveError::InvalidState` while the
    /// session is still asking.
    pub fn save(
        &self,
        session: &TraversalSession<'_>,
        notes: Option<String>,
    ) -> Result<AssessmentRecord, SaveError> {
        let outcome = session.outcome().ok_or_else(|| SaveError::InvalidState {
            current_node_id: session.current_node().id().to_string(),
        })?;

        let record = AssessmentRecord {
            id: format!("symp-{}", Uuid::new_v4().simple()),
            created_at: Utc::now(),
            path: session.path().to_vec(),
            severity: outcome.severity,
            recommendation: outcome.recommendation.clone(),
            follow_up_required: outcome.follow_up_required,
            notes,
        };
        info!(
            record_id = %record.id,
            severity = %record.severity,
            follow_up = record.follow_up_required,
            "Assessment record created"
        );
        Ok(record)
    }
}
