/// Headline dataset statistics.
///
/// `department_count` deliberately EXCLUDES the `"Sin informacion"`
/// sentinel — a count of departments should not count "unknown" as a
/// department. The selection universe in `analysis::geographic` makes
/// the opposite choice; the two derivations are kept separate on
/// purpose.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::columns::{NO_INFORMATION, SEX_FEMALE, SEX_MALE};
use crate::model::{Dataset, DatasetError};

use super::categorical::{CategoryCount, CategoryShare};

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// The headline metrics rendered at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Rows that survived cleaning.
    pub total_records: usize,
    /// Columns in the source file.
    pub total_variables: usize,
    /// Distinct departments, excluding the unreported sentinel.
    pub department_count: usize,
    /// Distinct years observed.
    pub year_count: usize,
    pub year_min: i32,
    pub year_max: i32,
}

/// Computes the summary. Pure; no side effects.
///
/// Fails with `EmptyDataset` when there are no rows — year bounds over
/// an empty set would be nonsense, and this derivation refuses to
/// invent them.
pub fn summarize(dataset: &Dataset) -> Result<Summary, DatasetError> {
    if dataset.is_empty() {
        return Err(DatasetError::EmptyDataset("summary"));
    }

    let mut departments: BTreeSet<&str> = BTreeSet::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();
    for record in dataset.records() {
        if record.department != NO_INFORMATION {
            departments.insert(&record.department);
        }
        years.insert(record.year);
    }

    // years is non-empty because the dataset is non-empty.
    let year_min = *years.first().ok_or(DatasetError::EmptyDataset("summary"))?;
    let year_max = *years.last().ok_or(DatasetError::EmptyDataset("summary"))?;

    Ok(Summary {
        total_records: dataset.len(),
        total_variables: dataset.column_count(),
        department_count: departments.len(),
        year_count: years.len(),
        year_min,
        year_max,
    })
}

// ---------------------------------------------------------------------------
// Narrative metrics
// ---------------------------------------------------------------------------

/// Male-to-female case ratio, from an already-computed sex view.
///
/// Returns `None` when either sex is absent from the view — a ratio
/// against a missing side would be meaningless.
pub fn sex_ratio(shares: &[CategoryShare]) -> Option<f64> {
    let count_of = |key: &str| shares.iter().find(|s| s.key == key).map(|s| s.count);
    let male = count_of(SEX_MALE)?;
    let female = count_of(SEX_FEMALE)?;
    if female == 0 {
        return None;
    }
    Some(male as f64 / female as f64)
}

/// The leading entry of a count view with its share of the full dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadingShare {
    pub key: String,
    pub count: usize,
    /// Percentage of `total_records`, one decimal place.
    pub percentage: f64,
}

/// Extracts the top entry of an ordered count view, expressed as a share
/// of the whole dataset. `None` for an empty view or a zero total.
pub fn leading_share(view: &[CategoryCount], total_records: usize) -> Option<LeadingShare> {
    let top = view.first()?;
    if total_records == 0 {
        return None;
    }
    let raw = top.count as f64 / total_records as f64 * 100.0;
    Some(LeadingShare {
        key: top.key.clone(),
        count: top.count,
        percentage: (raw * 10.0).round() / 10.0,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IncidentRecord;

    fn incident(year: i32, department: &str) -> IncidentRecord {
        IncidentRecord {
            year,
            life_cycle_stage: "Adultez".to_string(),
            sex: SEX_MALE.to_string(),
            department: department.to_string(),
            scene: "Vivienda".to_string(),
            mechanism: "Ahorcamiento".to_string(),
            reason: "Conflicto de pareja".to_string(),
        }
    }

    fn dataset(records: Vec<IncidentRecord>) -> Dataset {
        let read = records.len();
        Dataset::new(records, 8, read, 0)
    }

    #[test]
    fn test_summary_counts_and_bounds() {
        let ds = dataset(vec![
            incident(2015, "Antioquia"),
            incident(2018, "Cundinamarca"),
            incident(2018, "Antioquia"),
            incident(2024, NO_INFORMATION),
        ]);
        let summary = summarize(&ds).expect("non-empty dataset");
        assert_eq!(summary.total_records, 4);
        assert_eq!(summary.total_variables, 8);
        assert_eq!(
            summary.department_count, 2,
            "sentinel must not count as a department"
        );
        assert_eq!(summary.year_count, 3);
        assert_eq!(summary.year_min, 2015);
        assert_eq!(summary.year_max, 2024);
    }

    #[test]
    fn test_summary_on_empty_dataset_is_an_error() {
        let ds = dataset(Vec::new());
        match summarize(&ds) {
            Err(DatasetError::EmptyDataset(derivation)) => {
                assert_eq!(derivation, "summary");
            }
            other => panic!("expected EmptyDataset, got {:?}", other),
        }
    }

    #[test]
    fn test_department_count_zero_when_all_unreported() {
        let ds = dataset(vec![
            incident(2019, NO_INFORMATION),
            incident(2020, NO_INFORMATION),
        ]);
        let summary = summarize(&ds).expect("non-empty dataset");
        assert_eq!(summary.department_count, 0);
    }

    #[test]
    fn test_sex_ratio_from_shares() {
        let shares = vec![
            CategoryShare {
                key: SEX_MALE.to_string(),
                count: 10,
                percentage: 76.9,
            },
            CategoryShare {
                key: SEX_FEMALE.to_string(),
                count: 3,
                percentage: 23.1,
            },
        ];
        let ratio = sex_ratio(&shares).expect("both sexes present");
        assert!((ratio - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sex_ratio_none_when_a_side_is_absent() {
        let shares = vec![CategoryShare {
            key: SEX_MALE.to_string(),
            count: 10,
            percentage: 100.0,
        }];
        assert!(sex_ratio(&shares).is_none());
        assert!(sex_ratio(&[]).is_none());
    }

    #[test]
    fn test_leading_share_takes_the_first_entry() {
        let view = vec![
            CategoryCount {
                key: "Adultez".to_string(),
                count: 3,
            },
            CategoryCount {
                key: "Juventud".to_string(),
                count: 1,
            },
        ];
        let lead = leading_share(&view, 4).expect("non-empty view");
        assert_eq!(lead.key, "Adultez");
        assert_eq!(lead.count, 3);
        assert_eq!(lead.percentage, 75.0);
    }

    #[test]
    fn test_leading_share_none_for_empty_view() {
        assert!(leading_share(&[], 100).is_none());
    }
}
