use super::tree::{GraphDefinition, NodeDefinition};
use crate::error::ArtifactError;
use crate::graph::{DecisionGraphStore, DecisionNode};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A built decision graph in a serializable form.
///
/// Nodes are stored sorted by id so that the same graph always encodes to the same bytes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GraphArtifact {
    pub root_id: String,
    pub nodes: Vec<DecisionNode>,
}

impl GraphArtifact {
    pub fn from_store(store: &DecisionGraphStore) -> Self {
        let mut nodes: Vec<DecisionNode> = store.nodes().cloned().collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            root_id: store.root_id().to_string(),
            nodes,
        }
    }

    /// Rebuilds the store, re-running every graph validation.
    pub fn into_store(self) -> Result<DecisionGraphStore, ArtifactError> {
        let definition = GraphDefinition {
            root_id: self.root_id,
            nodes: self.nodes.into_iter().map(into_definition).collect(),
        };
        Ok(DecisionGraphStore::builder(definition).build()?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns (data, bytes_read)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }

    /// Saves the artifact to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not create file: {}", e),
        })?;
        file.write_all(&bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not write file: {}", e),
        })
    }

    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not open file: {}", e),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not read file: {}", e),
        })?;
        Self::from_bytes(&bytes)
    }
}

fn into_definition(node: DecisionNode) -> NodeDefinition {
    let (severity, recommendation, follow_up_required) = match node.outcome {
        Some(o) => (
            Some(o.severity),
            Some(o.recommendation),
            Some(o.follow_up_required),
        ),
        None => (None, None, None),
    };
    NodeDefinition {
        id: node.id,
        prompt: node.prompt,
        child_ids: node.child_ids,
        severity,
        recommendation,
        follow_up_required,
    }
}
