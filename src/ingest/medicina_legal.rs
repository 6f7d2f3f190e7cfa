/// Loader & cleaner for the Medicina Legal "Presuntos Suicidios" export.
///
/// The export is a comma-delimited UTF-8 file with a leading byte-order
/// mark (the Excel convention) and a header row. Cleaning is a single
/// global pass: any row with an empty value in ANY column is dropped
/// whole — there is no per-field imputation. Rows whose year field does
/// not parse as an integer are dropped the same way.
///
/// The loader is deterministic: the same file always yields a
/// row-for-row identical `Dataset`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::columns::{self, REQUIRED_COLUMNS};
use crate::logging;
use crate::model::{Dataset, DatasetError, IncidentRecord};

/// Column indices of the required columns, resolved once from the
/// header row.
struct ColumnIndices {
    year: usize,
    life_cycle_stage: usize,
    sex: usize,
    department: usize,
    scene: usize,
    mechanism: usize,
    reason: usize,
}

/// Reads, decodes and cleans the export at `path`.
///
/// Fails with `Io` if the file is unreadable, `Encoding` if its bytes
/// are not valid UTF-8, and `MissingColumns` if the header row lacks
/// any required column. There is no partial load: any of these aborts
/// the whole pipeline.
pub fn load(path: &Path) -> Result<Dataset, DatasetError> {
    let bytes = fs::read(path)
        .map_err(|e| DatasetError::Io(format!("{}: {}", path.display(), e)))?;
    let text = decode_utf8(&bytes)?;
    parse_rows(text)
}

/// Decodes the raw bytes as UTF-8, tolerating a leading BOM.
fn decode_utf8(bytes: &[u8]) -> Result<&str, DatasetError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| DatasetError::Encoding(e.to_string()))?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

fn parse_rows(text: &str) -> Result<Dataset, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DatasetError::Io(format!("failed to read CSV header: {}", e)))?
        .clone();

    let indices = resolve_columns(&headers)?;
    let column_count = headers.len();

    let mut records = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_dropped = 0usize;

    for result in reader.records() {
        rows_read += 1;

        let row = match result {
            Ok(r) => r,
            Err(_) => {
                // Structurally broken row (e.g. unbalanced quotes) —
                // treated like an incomplete row, not a fatal error.
                rows_dropped += 1;
                continue;
            }
        };

        // Row-complete filter: every column of the file must be
        // populated, not just the ones we carry.
        if row.len() != column_count || row.iter().any(|field| field.is_empty()) {
            rows_dropped += 1;
            continue;
        }

        let year = match row[indices.year].parse::<i32>() {
            Ok(y) => y,
            Err(_) => {
                rows_dropped += 1;
                continue;
            }
        };

        records.push(IncidentRecord {
            year,
            life_cycle_stage: row[indices.life_cycle_stage].to_string(),
            sex: row[indices.sex].to_string(),
            department: row[indices.department].to_string(),
            scene: row[indices.scene].to_string(),
            mechanism: row[indices.mechanism].to_string(),
            reason: row[indices.reason].to_string(),
        });
    }

    logging::log_clean_summary(rows_read, records.len(), rows_dropped);

    Ok(Dataset::new(records, column_count, rows_read, rows_dropped))
}

/// Validates the header row and resolves each required column to its
/// index. Reports every missing column at once, not just the first.
fn resolve_columns(headers: &csv::StringRecord) -> Result<ColumnIndices, DatasetError> {
    let index: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name, i))
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !index.contains_key(c.header))
        .map(|c| c.header.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns(missing));
    }

    Ok(ColumnIndices {
        year: index[columns::COL_YEAR],
        life_cycle_stage: index[columns::COL_LIFE_CYCLE],
        sex: index[columns::COL_SEX],
        department: index[columns::COL_DEPARTMENT],
        scene: index[columns::COL_SCENE],
        mechanism: index[columns::COL_MECHANISM],
        reason: index[columns::COL_REASON],
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
