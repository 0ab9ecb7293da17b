use crate::error::GraphConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Triage classification of an outcome.
///
/// Variants are ordered by urgency, so `Severity::Severe > Severity::Mild`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = GraphConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mild" => Ok(Severity::Mild),
            "moderate" => Ok(Severity::Moderate),
            "severe" => Ok(Severity::Severe),
            _ => Err(GraphConversionError::UnknownSeverity(s.to_string())),
        }
    }
}

/// The triage result carried by a terminal node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub severity: Severity,
    pub recommendation: String,
    pub follow_up_required: bool,
}

/// A question or outcome point in a built decision graph.
///
/// Nodes only exist inside a `DecisionGraphStore`, which guarantees that a node has
/// either children or an outcome, never both and never neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionNode {
    pub(crate) id: String,
    pub(crate) prompt: String,
    pub(crate) child_ids: Vec<String>,
    pub(crate) outcome: Option<Outcome>,
}

impl DecisionNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The question text, or the outcome statement for terminal nodes.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Ids of the answers to this question, in presentation order.
    pub fn child_ids(&self) -> &[String] {
        &self.child_ids
    }

    pub fn is_terminal(&self) -> bool {
        self.child_ids.is_empty() && self.outcome.is_some()
    }

    pub fn has_child(&self, id: &str) -> bool {
        self.child_ids.iter().any(|c| c == id)
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn severity(&self) -> Option<Severity> {
        self.outcome.as_ref().map(|o| o.severity)
    }

    pub fn recommendation(&self) -> Option<&str> {
        self.outcome.as_ref().map(|o| o.recommendation.as_str())
    }

    pub fn follow_up_required(&self) -> Option<bool> {
        self.outcome.as_ref().map(|o| o.follow_up_required)
    }
}
