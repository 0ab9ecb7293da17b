use super::{DecisionGraphStore, DecisionNode, Outcome};
use crate::definition::{GraphDefinition, NodeDefinition};
use crate::error::GraphBuildError;
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;
use tracing::{debug, warn};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Validates a `GraphDefinition` and turns it into an immutable `DecisionGraphStore`.
pub struct GraphBuilder {
    definition: GraphDefinition,
    root_override: Option<String>,
}

impl GraphBuilder {
    pub fn new(definition: GraphDefinition) -> Self {
        Self {
            definition,
            root_override: None,
        }
    }

    /// Uses `root_id` as the designated root instead of the definition's own root.
    pub fn with_root(mut self, root_id: &str) -> Self {
        self.root_override = Some(root_id.to_string());
        self
    }

    pub fn build(self) -> Result<DecisionGraphStore, GraphBuildError> {
        let root_id = self
            .root_override
            .unwrap_or_else(|| self.definition.root_id.clone());
        let definitions = self.definition.nodes;

        let mut index: AHashMap<&str, &NodeDefinition> =
            AHashMap::with_capacity(definitions.len());
        for node in &definitions {
            if index.insert(node.id.as_str(), node).is_some() {
                return Err(GraphBuildError::DuplicateNode(node.id.clone()));
            }
        }

        if !index.contains_key(root_id.as_str()) {
            return Err(GraphBuildError::RootNotFound(root_id));
        }

        for node in &definitions {
            check_node(node, &index)?;
        }
        check_acyclic(&definitions, &index)?;
        warn_unreachable(&root_id, &definitions, &index);

        let nodes: AHashMap<String, DecisionNode> = definitions
            .into_iter()
            .map(|def| (def.id.clone(), into_decision_node(def)))
            .collect();

        debug!(root = %root_id, nodes = nodes.len(), "Decision graph built");
        Ok(DecisionGraphStore { root_id, nodes })
    }
}

/// Checks the local shape of a node: branches have resolvable children and no
/// outcome, leaves carry a complete outcome.
fn check_node(
    node: &NodeDefinition,
    index: &AHashMap<&str, &NodeDefinition>,
) -> Result<(), GraphBuildError> {
    if !node.child_ids.is_empty() {
        if node.has_outcome_fields() {
            return Err(GraphBuildError::OutcomeOnBranch(node.id.clone()));
        }
        if let Some(missing) = node
            .child_ids
            .iter()
            .find(|child| !index.contains_key(child.as_str()))
        {
            return Err(GraphBuildError::DanglingEdge {
                missing_node_id: missing.clone(),
                parent_id: node.id.clone(),
            });
        }
        return Ok(());
    }

    let missing_field = if node.severity.is_none() {
        Some("severity")
    } else if node.recommendation.is_none() {
        Some("recommendation")
    } else if node.follow_up_required.is_none() {
        Some("followUpRequired")
    } else {
        None
    };
    match missing_field {
        Some(field) => Err(GraphBuildError::MissingOutcome {
            node_id: node.id.clone(),
            field,
        }),
        None => Ok(()),
    }
}

fn check_acyclic(
    definitions: &[NodeDefinition],
    index: &AHashMap<&str, &NodeDefinition>,
) -> Result<(), GraphBuildError> {
    let mut marks: AHashMap<&str, Mark> = AHashMap::with_capacity(definitions.len());
    for node in definitions {
        visit(node.id.as_str(), index, &mut marks)?;
    }
    Ok(())
}

/// Depth-first visit; meeting a node that is still on the stack means a back edge.
fn visit<'a>(
    node_id: &'a str,
    index: &AHashMap<&'a str, &'a NodeDefinition>,
    marks: &mut AHashMap<&'a str, Mark>,
) -> Result<(), GraphBuildError> {
    if marks.get(node_id) == Some(&Mark::Done) {
        return Ok(());
    }
    marks.insert(node_id, Mark::Visiting);

    if let Some(&node) = index.get(node_id) {
        for child in &node.child_ids {
            match marks.get(child.as_str()) {
                Some(Mark::Visiting) => {
                    return Err(GraphBuildError::Cycle {
                        from: node_id.to_string(),
                        to: child.clone(),
                    });
                }
                Some(Mark::Done) => {}
                None => visit(child.as_str(), index, marks)?,
            }
        }
    }

    marks.insert(node_id, Mark::Done);
    Ok(())
}

fn warn_unreachable(
    root_id: &str,
    definitions: &[NodeDefinition],
    index: &AHashMap<&str, &NodeDefinition>,
) {
    let mut reached: AHashSet<&str> = AHashSet::new();
    let mut queue = VecDeque::from([root_id]);
    while let Some(id) = queue.pop_front() {
        if !reached.insert(id) {
            continue;
        }
        if let Some(&node) = index.get(id) {
            queue.extend(node.child_ids.iter().map(String::as_str));
        }
    }

    for node in definitions.iter().filter(|n| !reached.contains(n.id.as_str())) {
        warn!(node_id = %node.id, root = %root_id, "Node is unreachable from the root");
    }
}

/// Only called after `check_node`, so leaves are known to carry every outcome field.
fn into_decision_node(def: NodeDefinition) -> DecisionNode {
    let outcome = match (def.severity, def.recommendation, def.follow_up_required) {
        (Some(severity), Some(recommendation), Some(follow_up_required))
            if def.child_ids.is_empty() =>
        {
            Some(Outcome {
                severity,
                recommendation,
                follow_up_required,
            })
        }
        _ => None,
    };
    DecisionNode {
        id: def.id,
        prompt: def.prompt,
        child_ids: def.child_ids,
        outcome,
    }
}
