//! Per-assessment traversal state.
//!
//! A `TraversalSession` walks one user through a `DecisionGraphStore`, one answer
//! at a time, until a terminal node is reached. Sessions borrow the store, so any
//! number of them can run against the same graph.

use crate::error::TransitionError;
use crate::graph::{DecisionGraphStore, DecisionNode, Outcome, Severity};
use tracing::{debug, warn};

/// How a session treats a choice that is not an answer of the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Reject the choice with `TransitionError::InvalidChoice` and leave the session untouched.
    #[default]
    Guarded,
    /// Accept any id: it is appended to the path and resolved through the store's
    /// root fallback, so an unknown id silently sends the user back to the first question.
    Lenient,
}

/// Observable state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The current node is a question waiting for an answer.
    Asking,
    /// The current node is terminal and its outcome is available.
    Complete,
}

/// Mutable progress of a single assessment through the decision graph.
#[derive(Debug, Clone)]
pub struct TraversalSession<'g> {
    store: &'g DecisionGraphStore,
    policy: TransitionPolicy,
    path: Vec<String>,
    current: &'g DecisionNode,
}

impl<'g> TraversalSession<'g> {
    /// Starts a guarded session at the root.
    pub fn new(store: &'g DecisionGraphStore) -> Self {
        Self::with_policy(store, TransitionPolicy::Guarded)
    }

    pub fn with_policy(store: &'g DecisionGraphStore, policy: TransitionPolicy) -> Self {
        Self {
            store,
            policy,
            path: Vec::new(),
            current: store.root(),
        }
    }

    /// Starts a guarded session and advances it through `choices` in order.
    pub fn replay<S: AsRef<str>>(
        store: &'g DecisionGraphStore,
        choices: &[S],
    ) -> Result<Self, TransitionError> {
        Self::replay_with_policy(store, TransitionPolicy::Guarded, choices)
    }

    /// Like [`replay`](Self::replay), but under `policy`.
    pub fn replay_with_policy<S: AsRef<str>>(
        store: &'g DecisionGraphStore,
        policy: TransitionPolicy,
        choices: &[S],
    ) -> Result<Self, TransitionError> {
        let mut session = Self::with_policy(store, policy);
        for choice in choices {
            session.advance(choice.as_ref())?;
        }
        Ok(session)
    }

    pub fn state(&self) -> SessionState {
        if self.current.is_terminal() {
            SessionState::Complete
        } else {
            SessionState::Asking
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == SessionState::Complete
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn store(&self) -> &'g DecisionGraphStore {
        self.store
    }

    /// Ids chosen so far, root excluded.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn current_node(&self) -> &'g DecisionNode {
        self.current
    }

    /// Answers offered by the current question; empty once complete.
    pub fn choices(&self) -> Vec<&'g DecisionNode> {
        self.store.list_children(self.current.id())
    }

    /// The outcome of the assessment, available only in the `Complete` state.
    pub fn outcome(&self) -> Option<&'g Outcome> {
        if self.is_complete() {
            self.current.outcome()
        } else {
            None
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        self.outcome().map(|o| o.severity)
    }

    pub fn recommendation(&self) -> Option<&'g str> {
        self.outcome().map(|o| o.recommendation.as_str())
    }

    pub fn follow_up_required(&self) -> Option<bool> {
        self.outcome().map(|o| o.follow_up_required)
    }

    /// Moves one edge down the graph by selecting `choice_id`.
    ///
    /// Returns the node that is now current. A rejected move leaves the session unchanged.
    pub fn advance(&mut self, choice_id: &str) -> Result<&'g DecisionNode, TransitionError> {
        if self.is_complete() {
            return Err(TransitionError::SessionComplete(self.current.id().to_string()));
        }

        if !self.current.has_child(choice_id) {
            match self.policy {
                TransitionPolicy::Guarded => {
                    return Err(TransitionError::InvalidChoice {
                        node_id: self.current.id().to_string(),
                        choice_id: choice_id.to_string(),
                    });
                }
                TransitionPolicy::Lenient => {
                    warn!(
                        node_id = %self.current.id(),
                        choice_id = %choice_id,
                        "Accepting choice that is not an answer of the current node"
                    );
                }
            }
        }

        self.path.push(choice_id.to_string());
        self.current = self.store.get_node(choice_id);
        debug!(
            choice_id = %choice_id,
            node_id = %self.current.id(),
            depth = self.path.len(),
            complete = self.current.is_terminal(),
            "Session advanced"
        );
        Ok(self.current)
    }

    /// Undoes the last choice. Returns `false` when already at the root.
    pub fn retreat(&mut self) -> bool {
        if self.path.pop().is_none() {
            return false;
        }
        self.current = match self.path.last() {
            Some(id) => self.store.get_node(id),
            None => self.store.root(),
        };
        debug!(node_id = %self.current.id(), depth = self.path.len(), "Session retreated");
        true
    }

    /// Clears all progress and returns to the root question.
    pub fn reset(&mut self) {
        self.path.clear();
        self.current = self.store.root();
        debug!("Session reset");
    }
}
