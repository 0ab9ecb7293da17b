use super::tree::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for custom tree formats that can be converted into a `GraphDefinition`.
///
/// This is the extension point for loading decision trees from any source. By
/// implementing this trait on your own parsing structs, you provide a translation
/// layer that the graph builder can validate and turn into a store.
///
/// # Example
///
/// ```rust,no_run
/// use triage::prelude::*;
/// use triage::error::GraphConversionError;
///
/// struct MyQuestion { key: String, text: String, answers: Vec<String> }
/// struct MyTree { questions: Vec<MyQuestion> }
///
/// impl IntoGraph for MyTree {
///     fn into_graph(self) -> std::result::Result<GraphDefinition, GraphConversionError> {
///         let nodes = self
///             .questions
///             .into_iter()
///             .map(|q| NodeDefinition {
///                 id: q.key,
///                 prompt: q.text,
///                 child_ids: q.answers,
///                 severity: None,
///                 recommendation: None,
///                 follow_up_required: None,
///             })
///             .collect();
///         Ok(GraphDefinition::new("start", nodes))
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a decision graph definition.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}

impl IntoGraph for GraphDefinition {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        Ok(self)
    }
}
