use crate::graph::Severity;

/// The complete, canonical definition of a decision graph, ready to be built into a store.
/// This is the target structure for any custom tree format conversion.
#[derive(Debug, Clone, Default)]
pub struct GraphDefinition {
    pub root_id: String,
    pub nodes: Vec<NodeDefinition>,
}

impl GraphDefinition {
    pub fn new(root_id: impl Into<String>, nodes: Vec<NodeDefinition>) -> Self {
        Self {
            root_id: root_id.into(),
            nodes,
        }
    }
}

/// Defines a single question or outcome node.
///
/// Outcome fields are optional here so that malformed input can be reported by the
/// graph builder instead of being rejected by the type system at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDefinition {
    pub id: String,
    pub prompt: String,
    pub child_ids: Vec<String>,
    pub severity: Option<Severity>,
    pub recommendation: Option<String>,
    pub follow_up_required: Option<bool>,
}

impl NodeDefinition {
    /// A question node offering `child_ids` as answers, in presentation order.
    pub fn question(id: &str, prompt: &str, child_ids: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            child_ids: child_ids.iter().map(|c| c.to_string()).collect(),
            severity: None,
            recommendation: None,
            follow_up_required: None,
        }
    }

    /// A terminal node carrying a complete triage outcome.
    pub fn outcome(
        id: &str,
        prompt: &str,
        severity: Severity,
        recommendation: &str,
        follow_up_required: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            child_ids: Vec::new(),
            severity: Some(severity),
            recommendation: Some(recommendation.to_string()),
            follow_up_required: Some(follow_up_required),
        }
    }

    pub(crate) fn has_outcome_fields(&self) -> bool {
        self.severity.is_some() || self.recommendation.is_some() || self.follow_up_required.is_some()
    }
}
