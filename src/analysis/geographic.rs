/// Geographic breakdown: department × year counts and the department
/// selection universe.
///
/// The selection universe INCLUDES the `"Sin informacion"` sentinel —
/// a user may legitimately want to inspect the unattributed cases. This
/// is the deliberate opposite of `summary::summarize`, whose department
/// count excludes the sentinel.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::Dataset;

use super::temporal::YearCount;

/// One observed (department, year) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentYearCount {
    pub department: String,
    pub year: i32,
    pub count: usize,
}

/// Counts records per observed (department, year) pair.
///
/// Sparse: a department/year combination with no cases is omitted.
/// Ordered by department ascending, then year ascending.
pub fn by_department_and_year(dataset: &Dataset) -> Vec<DepartmentYearCount> {
    let mut counts: BTreeMap<(&str, i32), usize> = BTreeMap::new();
    for record in dataset.records() {
        *counts
            .entry((&record.department, record.year))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((department, year), count)| DepartmentYearCount {
            department: department.to_string(),
            year,
            count,
        })
        .collect()
}

/// Filters a precomputed breakdown down to one department's yearly
/// series, for the presentation layer's department selector. Year order
/// is inherited from the breakdown (ascending).
pub fn department_series(
    breakdown: &[DepartmentYearCount],
    department: &str,
) -> Vec<YearCount> {
    breakdown
        .iter()
        .filter(|entry| entry.department == department)
        .map(|entry| YearCount {
            year: entry.year,
            count: entry.count,
        })
        .collect()
}

/// The distinct department names available for selection, alphabetically
/// sorted. Includes the unreported sentinel when present in the data.
pub fn department_universe(dataset: &Dataset) -> Vec<String> {
    let names: BTreeSet<&str> = dataset
        .records()
        .iter()
        .map(|record| record.department.as_str())
        .collect();
    names.into_iter().map(String::from).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
