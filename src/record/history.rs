use super::AssessmentRecord;
use crate::error::HistoryError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage namespace used for symptom history when none is configured.
pub const DEFAULT_NAMESPACE: &str = "healthbridge_symptom_history";

/// An append-only list of saved assessments.
///
/// `list_records` returns records in insertion order.
pub trait HistoryStore {
    fn append_record(&mut self, record: AssessmentRecord) -> Result<(), HistoryError>;

    fn list_records(&self) -> Result<Vec<AssessmentRecord>, HistoryError>;

    /// Removes every stored record.
    fn clear(&mut self) -> Result<(), HistoryError>;
}

/// Keeps history in process memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryHistory {
    records: Vec<AssessmentRecord>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistory {
    fn append_record(&mut self, record: AssessmentRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        Ok(())
    }

    fn list_records(&self) -> Result<Vec<AssessmentRecord>, HistoryError> {
        Ok(self.records.clone())
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.records.clear();
        Ok(())
    }
}

/// Keeps history as a JSON array in `<dir>/<namespace>.json`.
///
/// The whole file is rewritten on every append. A missing file reads as an empty history.
#[derive(Debug, Clone)]
pub struct JsonFileHistory {
    path: PathBuf,
}

impl JsonFileHistory {
    pub fn new(dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", namespace)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn write_all(&self, records: &[AssessmentRecord]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

impl HistoryStore for JsonFileHistory {
    fn append_record(&mut self, record: AssessmentRecord) -> Result<(), HistoryError> {
        let mut records = self.list_records()?;
        debug!(record_id = %record.id(), path = %self.path.display(), "Appending record to history");
        records.push(record);
        self.write_all(&records)
    }

    fn list_records(&self) -> Result<Vec<AssessmentRecord>, HistoryError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
