/// Time-series aggregation: yearly counts, headline indicators and the
/// total-period variation.
///
/// Years absent from the data are simply absent from the series — there
/// is no gap-filling. The indicator helpers, by contrast, treat an
/// absent configured year as a count of zero, because a headline metric
/// tile must always render something.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Dataset, DatasetError};

/// Years shown as headline indicators when no config overrides them.
pub const DEFAULT_INDICATOR_YEARS: [i32; 4] = [2021, 2022, 2023, 2024];

// ---------------------------------------------------------------------------
// Yearly series
// ---------------------------------------------------------------------------

/// One point of the yearly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Counts records per year, ascending by year, one entry per observed
/// year. Fails with `EmptyDataset` when there are no rows.
pub fn yearly_counts(dataset: &Dataset) -> Result<Vec<YearCount>, DatasetError> {
    if dataset.is_empty() {
        return Err(DatasetError::EmptyDataset("yearly counts"));
    }

    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for record in dataset.records() {
        *counts.entry(record.year).or_insert(0) += 1;
    }

    Ok(counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect())
}

// ---------------------------------------------------------------------------
// Headline indicators
// ---------------------------------------------------------------------------

/// A headline indicator: a configured year's count and its relative
/// delta against the previous configured year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearIndicator {
    pub year: i32,
    pub count: usize,
    /// Relative change vs. the previous configured year (e.g. -0.5 for
    /// a halving). Defined as 0 for the first configured year (no prior
    /// reference) and 0 when the prior year's count is zero.
    pub delta: f64,
}

/// Extracts the headline indicators for `years` (oldest first) from an
/// already-computed yearly series. A configured year absent from the
/// series counts as zero.
pub fn year_indicators(series: &[YearCount], years: &[i32]) -> Vec<YearIndicator> {
    let count_for = |year: i32| {
        series
            .iter()
            .find(|entry| entry.year == year)
            .map(|entry| entry.count)
            .unwrap_or(0)
    };

    years
        .iter()
        .enumerate()
        .map(|(i, &year)| {
            let count = count_for(year);
            let delta = if i == 0 {
                0.0
            } else {
                let prior = count_for(years[i - 1]);
                if prior == 0 {
                    0.0
                } else {
                    (count as f64 - prior as f64) / prior as f64
                }
            };
            YearIndicator { year, count, delta }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Total-period variation
// ---------------------------------------------------------------------------

/// Percent change from the chronologically first to the last year of the
/// full series.
///
/// Returns `None` for an empty series and when the first year's count is
/// zero — an undefined marker, not an error, so the rest of the
/// dashboard stays renderable.
pub fn total_variation(series: &[YearCount]) -> Option<f64> {
    let first = series.first()?;
    let last = series.last()?;
    if first.count == 0 {
        return None;
    }
    Some((last.count as f64 - first.count as f64) / first.count as f64 * 100.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{SEX_FEMALE, SEX_MALE};
    use crate::model::IncidentRecord;

    fn incident(year: i32, sex: &str) -> IncidentRecord {
        IncidentRecord {
            year,
            life_cycle_stage: "Adultez".to_string(),
            sex: sex.to_string(),
            department: "Antioquia".to_string(),
            scene: "Vivienda".to_string(),
            mechanism: "Ahorcamiento".to_string(),
            reason: "Conflicto de pareja".to_string(),
        }
    }

    fn dataset(records: Vec<IncidentRecord>) -> Dataset {
        let read = records.len();
        Dataset::new(records, 8, read, 0)
    }

    fn series(points: &[(i32, usize)]) -> Vec<YearCount> {
        points
            .iter()
            .map(|&(year, count)| YearCount { year, count })
            .collect()
    }

    #[test]
    fn test_yearly_counts_match_worked_example() {
        // [(2015,"Hombre"),(2015,"Mujer"),(2016,"Hombre")] -> [(2015,2),(2016,1)]
        let ds = dataset(vec![
            incident(2015, SEX_MALE),
            incident(2015, SEX_FEMALE),
            incident(2016, SEX_MALE),
        ]);
        let counts = yearly_counts(&ds).expect("non-empty dataset");
        assert_eq!(counts, series(&[(2015, 2), (2016, 1)]));
    }

    #[test]
    fn test_yearly_counts_strictly_increasing_no_duplicates() {
        let ds = dataset(vec![
            incident(2020, SEX_MALE),
            incident(2015, SEX_MALE),
            incident(2020, SEX_MALE),
            incident(2017, SEX_MALE),
        ]);
        let counts = yearly_counts(&ds).expect("non-empty dataset");
        for pair in counts.windows(2) {
            assert!(
                pair[0].year < pair[1].year,
                "years must be strictly increasing, got {} then {}",
                pair[0].year,
                pair[1].year
            );
        }
    }

    #[test]
    fn test_yearly_counts_empty_dataset_is_an_error() {
        let ds = dataset(Vec::new());
        match yearly_counts(&ds) {
            Err(DatasetError::EmptyDataset(derivation)) => {
                assert_eq!(derivation, "yearly counts");
            }
            other => panic!("expected EmptyDataset, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_years_are_omitted_not_zero_filled() {
        let ds = dataset(vec![incident(2015, SEX_MALE), incident(2018, SEX_MALE)]);
        let counts = yearly_counts(&ds).expect("non-empty dataset");
        assert_eq!(counts, series(&[(2015, 1), (2018, 1)]));
    }

    #[test]
    fn test_first_indicator_delta_is_always_zero() {
        let s = series(&[(2021, 500), (2022, 600)]);
        let indicators = year_indicators(&s, &DEFAULT_INDICATOR_YEARS);
        assert_eq!(indicators[0].year, 2021);
        assert_eq!(
            indicators[0].delta, 0.0,
            "first configured year has no prior reference; delta is defined as 0"
        );
    }

    #[test]
    fn test_indicator_delta_matches_worked_example() {
        // counts 2015=2, 2016=1 -> delta for 2016 is (1-2)/2 = -0.5.
        let s = series(&[(2015, 2), (2016, 1)]);
        let indicators = year_indicators(&s, &[2015, 2016]);
        assert_eq!(indicators[1].delta, -0.5);
    }

    #[test]
    fn test_indicator_missing_year_counts_as_zero() {
        let s = series(&[(2021, 100), (2023, 50)]);
        let indicators = year_indicators(&s, &DEFAULT_INDICATOR_YEARS);
        assert_eq!(indicators[1].year, 2022);
        assert_eq!(indicators[1].count, 0);
        // 2023's prior (2022) is 0, so its delta is guarded to 0.
        assert_eq!(indicators[2].count, 50);
        assert_eq!(indicators[2].delta, 0.0);
    }

    #[test]
    fn test_total_variation_over_full_series() {
        // 2015=100 ... 2024=150 -> +50%.
        let s = series(&[(2015, 100), (2019, 300), (2024, 150)]);
        let variation = total_variation(&s).expect("first count is nonzero");
        assert_eq!(variation, 50.0);
    }

    #[test]
    fn test_total_variation_negative_for_a_decline() {
        let s = series(&[(2015, 200), (2024, 150)]);
        let variation = total_variation(&s).expect("first count is nonzero");
        assert_eq!(variation, -25.0);
    }

    #[test]
    fn test_total_variation_undefined_cases() {
        assert!(
            total_variation(&[]).is_none(),
            "empty series has no variation"
        );
        let zero_start = series(&[(2015, 0), (2024, 10)]);
        assert!(
            total_variation(&zero_start).is_none(),
            "zero first-year count must yield the undefined marker, not a division"
        );
    }
}
