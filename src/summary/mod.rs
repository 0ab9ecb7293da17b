//! Human-readable views of paths and saved history.

pub mod formatter;

pub use formatter::PathFormatter;

use crate::graph::Severity;
use crate::record::AssessmentRecord;
use ahash::AHashMap;

/// Aggregate view over a list of saved assessments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub total: usize,
    pub follow_ups: usize,
    pub by_severity: AHashMap<Severity, usize>,
    /// The most urgent severity seen, if any record exists.
    pub highest_severity: Option<Severity>,
}

impl HistorySummary {
    pub fn from_records(records: &[AssessmentRecord]) -> Self {
        let mut by_severity: AHashMap<Severity, usize> = AHashMap::new();
        for record in records {
            *by_severity.entry(record.severity()).or_default() += 1;
        }
        Self {
            total: records.len(),
            follow_ups: records.iter().filter(|r| r.follow_up_required()).count(),
            highest_severity: by_severity.keys().max().copied(),
            by_severity,
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }

    /// The headline shown next to the symptom checker, e.g. "You have 2 saved assessment(s)."
    pub fn headline(&self) -> String {
        format!("You have {} saved assessment(s).", self.total)
    }

    /// Per-severity counts in ascending urgency, skipping severities with no records.
    pub fn breakdown(&self) -> Vec<(Severity, usize)> {
        Severity::ALL
            .iter()
            .map(|s| (*s, self.count(*s)))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}
