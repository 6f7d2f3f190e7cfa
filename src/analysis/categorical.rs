/// Categorical aggregation: grouped counts, shares and cross-tabs.
///
/// # Ordering
/// All count views share one deterministic comparator: count descending,
/// then key ascending. Grouping goes through a `BTreeMap`, so equal
/// counts come out already key-sorted and the stable sort on count
/// preserves that order. Truncation (`top_n`) happens after sorting;
/// exclusion happens before counting.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::columns::Field;
use crate::model::Dataset;

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// One key of a grouped count view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub key: String,
    pub count: usize,
}

/// One key of a grouped count view with its percentage of the
/// (post-exclusion) total, rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub key: String,
    pub count: usize,
    pub percentage: f64,
}

/// One observed combination of a two-field cross-tabulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossCount {
    pub key_a: String,
    pub key_b: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Grouped counts
// ---------------------------------------------------------------------------

/// Counts records grouped by `field`.
///
/// Rows whose value is in `exclude` are removed before counting, so an
/// excluded value can never occupy a top-N slot. The result is ordered
/// count-descending with ties broken key-ascending.
pub fn count_by(
    dataset: &Dataset,
    field: Field,
    top_n: Option<usize>,
    exclude: &[&str],
) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in dataset.records() {
        let value = field.value(record);
        if exclude.contains(&value) {
            continue;
        }
        *counts.entry(value).or_insert(0) += 1;
    }
    sorted_counts(counts, top_n)
}

/// Like `count_by`, but attaches each key's percentage of the total.
///
/// The total is the post-exclusion row count, taken before any `top_n`
/// truncation, so percentages always describe the whole filtered field.
pub fn count_by_with_share(
    dataset: &Dataset,
    field: Field,
    top_n: Option<usize>,
    exclude: &[&str],
) -> Vec<CategoryShare> {
    let counts = count_by(dataset, field, None, exclude);
    let total: usize = counts.iter().map(|c| c.count).sum();

    let mut shares: Vec<CategoryShare> = counts
        .into_iter()
        .map(|c| {
            let percentage = if total == 0 {
                0.0
            } else {
                round_one_decimal(c.count as f64 / total as f64 * 100.0)
            };
            CategoryShare {
                key: c.key,
                count: c.count,
                percentage,
            }
        })
        .collect();
    if let Some(n) = top_n {
        shares.truncate(n);
    }
    shares
}

/// Applies the shared comparator and truncation to a grouped count map.
///
/// Shared with `reasons::top_reasons` so the filtered view orders its
/// output exactly like the fixed views.
pub(crate) fn sorted_counts(
    counts: BTreeMap<&str, usize>,
    top_n: Option<usize>,
) -> Vec<CategoryCount> {
    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(key, count)| CategoryCount {
            key: key.to_string(),
            count,
        })
        .collect();
    // Stable sort over key-ascending input: ties stay key-ascending.
    out.sort_by(|a, b| b.count.cmp(&a.count));
    if let Some(n) = top_n {
        out.truncate(n);
    }
    out
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Cross-tabulation
// ---------------------------------------------------------------------------

/// Counts every observed combination of `field_a` × `field_b`.
///
/// Sparse: combinations that never occur are omitted, not emitted as
/// zero. Ordered by (key_a, key_b) ascending.
pub fn cross_count(dataset: &Dataset, field_a: Field, field_b: Field) -> Vec<CrossCount> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for record in dataset.records() {
        let pair = (field_a.value(record), field_b.value(record));
        *counts.entry(pair).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((key_a, key_b), count)| CrossCount {
            key_a: key_a.to_string(),
            key_b: key_b.to_string(),
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
