/// Core data types for the suicide incident analytics service.
///
/// This module defines the shared domain model imported by all other
/// modules. It contains no I/O and no aggregation logic — only types and
/// the pipeline error enum.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// One cleaned incident row from the Medicina Legal export.
///
/// A record only exists if every column of its source row (including
/// columns this service does not carry) was populated. `year` is the
/// single numeric field; everything else is a categorical string, which
/// may hold the `"Sin informacion"` sentinel in `department` and
/// `reason` — that sentinel is a real value, not a missing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentRecord {
    pub year: i32,
    pub life_cycle_stage: String,
    pub sex: String,
    pub department: String,
    pub scene: String,
    pub mechanism: String,
    pub reason: String,
}

/// The cleaned, immutable collection of records loaded from the source
/// file.
///
/// Produced once by `ingest` at startup and read-only afterwards. Every
/// aggregate in `analysis` is a pure function of this value, so the
/// fixed views can be computed in any order without coordination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<IncidentRecord>,
    column_count: usize,
    rows_read: usize,
    rows_dropped: usize,
}

impl Dataset {
    /// Assembles a dataset from already-cleaned records.
    ///
    /// Normally called only by `ingest::load`; exposed so tests can
    /// build datasets without going through a file.
    pub fn new(
        records: Vec<IncidentRecord>,
        column_count: usize,
        rows_read: usize,
        rows_dropped: usize,
    ) -> Self {
        Self {
            records,
            column_count,
            rows_read,
            rows_dropped,
        }
    }

    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    /// Number of complete rows that survived cleaning.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of columns in the source file, not just the columns this
    /// service carries. Reported as "variables analyzed" in the summary.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Total rows in the source file before cleaning.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Rows excluded by the row-complete filter (or with an unparseable
    /// year field).
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when loading the dataset or deriving aggregates.
///
/// The load-time variants (`Io`, `Encoding`, `MissingColumns`) are fatal:
/// there is no partial load. `EmptyDataset` is fatal only for the one
/// derivation that raised it — independent aggregates keep working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// The source file could not be opened or read.
    Io(String),
    /// The file bytes are not valid UTF-8 (with or without a BOM).
    Encoding(String),
    /// One or more required columns are absent from the header row.
    MissingColumns(Vec<String>),
    /// A derivation that needs at least one row ran on an empty dataset.
    /// Carries the name of the derivation that failed.
    EmptyDataset(&'static str),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(msg) => write!(f, "I/O error: {}", msg),
            DatasetError::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            DatasetError::MissingColumns(names) => {
                write!(f, "Missing required columns: {}", names.join(", "))
            }
            DatasetError::EmptyDataset(derivation) => {
                write!(f, "Dataset has no rows; cannot compute {}", derivation)
            }
        }
    }
}

impl std::error::Error for DatasetError {}
