//! The immutable decision graph and its lookups.
//!
//! Nodes are held in a flat arena keyed by id; edges are ids rather than
//! references, so the graph can be shared freely once built.

use crate::definition::{GraphDefinition, builtin};
use crate::error::GraphBuildError;
use ahash::AHashMap;
use tracing::debug;

mod builder;
mod node;

pub use builder::GraphBuilder;
pub use node::{DecisionNode, Outcome, Severity};

/// A read-only, validated decision graph.
///
/// Every store satisfies: the root exists, every child id resolves, branches have no
/// outcome, leaves have a complete outcome, and there are no cycles.
#[derive(Debug, Clone)]
pub struct DecisionGraphStore {
    pub(crate) root_id: String,
    pub(crate) nodes: AHashMap<String, DecisionNode>,
}

impl DecisionGraphStore {
    pub fn builder(definition: GraphDefinition) -> GraphBuilder {
        GraphBuilder::new(definition)
    }

    /// Builds the symptom tree that ships with the engine.
    pub fn builtin() -> Result<Self, GraphBuildError> {
        Self::builder(builtin::symptom_tree()).build()
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn root(&self) -> &DecisionNode {
        // The builder refuses definitions whose root is missing.
        &self.nodes[&self.root_id]
    }

    /// Returns the node for `id`, falling back to the root for unknown ids.
    ///
    /// This root fallback is the store's answer to stale or malformed ids: the
    /// caller is sent back to the start instead of receiving an error. Use
    /// [`try_node`](Self::try_node) when an unknown id must be detected.
    pub fn get_node(&self, id: &str) -> &DecisionNode {
        match self.nodes.get(id) {
            Some(node) => node,
            None => {
                debug!(node_id = %id, root = %self.root_id, "Unknown node id, falling back to root");
                self.root()
            }
        }
    }

    /// Strict lookup without the root fallback.
    pub fn try_node(&self, id: &str) -> Option<&DecisionNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Resolves the children of `id` in declaration order, which is the order
    /// choices are presented in. Unknown ids resolve like [`get_node`](Self::get_node).
    pub fn list_children(&self, id: &str) -> Vec<&DecisionNode> {
        self.get_node(id)
            .child_ids
            .iter()
            .map(|child_id| self.get_node(child_id))
            .collect()
    }

    /// Walks `choices` from the root and returns the node they lead to.
    ///
    /// Returns `None` as soon as a choice is not an answer of the node before it.
    pub fn resolve_path<S: AsRef<str>>(&self, choices: &[S]) -> Option<&DecisionNode> {
        choices.iter().try_fold(self.root(), |current, choice| {
            let choice = choice.as_ref();
            if current.has_child(choice) {
                self.try_node(choice)
            } else {
                None
            }
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids, sorted.
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn nodes(&self) -> impl Iterator<Item = &DecisionNode> {
        self.nodes.values()
    }
}
