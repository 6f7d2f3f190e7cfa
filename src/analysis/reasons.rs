/// The filterable top-reasons view.
///
/// This is the one aggregate recomputed reactively: the presentation
/// layer calls `top_reasons` again on every filter-selection change.
/// The core knows nothing about widgets — only about the filter value.

use std::collections::BTreeMap;

use crate::columns::NO_INFORMATION;
use crate::model::Dataset;

use super::categorical::{sorted_counts, CategoryCount};

/// Fixed cutoff of the reactive view.
pub const TOP_REASON_LIMIT: usize = 10;

/// The transient filter selection supplied by the presentation layer.
///
/// `None` on a dimension means "all" — no filter. The default selection
/// filters nothing and hides unreported reasons, matching the
/// dashboard's initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReasonFilter {
    pub life_cycle_stage: Option<String>,
    pub sex: Option<String>,
    /// When false, the `"Sin informacion"` sentinel is excluded before
    /// counting — it can never occupy a top slot.
    pub include_unreported: bool,
}

/// Top reasons under the given filter selection, ordered like every
/// other count view (count descending, key ascending), capped at
/// `TOP_REASON_LIMIT`.
///
/// An empty result (all rows filtered away) is valid, not an error.
pub fn top_reasons(dataset: &Dataset, filter: &ReasonFilter) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for record in dataset.records() {
        if let Some(stage) = &filter.life_cycle_stage {
            if record.life_cycle_stage != *stage {
                continue;
            }
        }
        if let Some(sex) = &filter.sex {
            if record.sex != *sex {
                continue;
            }
        }
        if !filter.include_unreported && record.reason == NO_INFORMATION {
            continue;
        }
        *counts.entry(record.reason.as_str()).or_insert(0) += 1;
    }

    sorted_counts(counts, Some(TOP_REASON_LIMIT))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
