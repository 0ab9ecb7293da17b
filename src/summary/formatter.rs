use crate::graph::DecisionGraphStore;
use crate::record::AssessmentRecord;
use itertools::Itertools;

/// Formats traversal paths into human-readable strings
pub struct PathFormatter;

impl PathFormatter {
    /// Joins the chosen ids, e.g. `fever > fever-low > fever-mild`.
    pub fn format_ids<S: AsRef<str>>(path: &[S]) -> String {
        if path.is_empty() {
            return "(no choices)".to_string();
        }
        path.iter().map(|id| id.as_ref()).join(" > ")
    }

    /// Renders each choice by the prompt it was presented with, one step per line.
    ///
    /// Ids the store does not know are shown as-is rather than through the root fallback.
    pub fn format_prompts<S: AsRef<str>>(store: &DecisionGraphStore, path: &[S]) -> String {
        path.iter()
            .enumerate()
            .map(|(step, id)| {
                let id = id.as_ref();
                let text = store.try_node(id).map_or(id, |node| node.prompt());
                format!("{}. {}", step + 1, text)
            })
            .join("\n")
    }

    /// One-line description of a saved record.
    pub fn format_record(record: &AssessmentRecord) -> String {
        let follow_up = if record.follow_up_required() {
            ", follow-up recommended"
        } else {
            ""
        };
        format!(
            "[{}] {} ({}{}): {}",
            record.created_at().format("%Y-%m-%d %H:%M"),
            record.severity(),
            Self::format_ids(record.path()),
            follow_up,
            record.recommendation()
        )
    }
}
