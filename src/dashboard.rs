/// Coordinating entry point: computes every fixed aggregate exactly once
/// over the immutable dataset and bundles the results for the
/// presentation layer.
///
/// Each view is an independent pure derivation; a failed derivation
/// (only `EmptyDataset` can occur here) is logged and leaves its field
/// empty without aborting the others. The one view NOT in this bundle
/// is `analysis::reasons::top_reasons`, which the presentation layer
/// recomputes per filter-selection change.

use serde::Serialize;

use crate::analysis::categorical::{
    count_by, count_by_with_share, cross_count, CategoryCount, CategoryShare, CrossCount,
};
use crate::analysis::geographic::{by_department_and_year, department_universe, DepartmentYearCount};
use crate::analysis::summary::{leading_share, sex_ratio, summarize, LeadingShare, Summary};
use crate::analysis::temporal::{
    total_variation, year_indicators, yearly_counts, YearCount, YearIndicator,
};
use crate::columns::{Field, NO_INFORMATION};
use crate::config::DashboardConfig;
use crate::logging::{self, Stage};
use crate::model::Dataset;

// ---------------------------------------------------------------------------
// Aggregate bundle
// ---------------------------------------------------------------------------

/// Everything the rendering layer needs, computed once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    /// Headline metrics. `None` only when the cleaned dataset is empty.
    pub summary: Option<Summary>,

    /// Life-cycle-stage counts, untruncated.
    pub life_cycle: Vec<CategoryCount>,
    /// Top life-cycle stage as a share of all records.
    pub life_cycle_leader: Option<LeadingShare>,

    /// Sex counts with percentage of total, untruncated.
    pub sex: Vec<CategoryShare>,
    /// Male-to-female case ratio; `None` when a sex is absent.
    pub sex_ratio: Option<f64>,
    /// Sex × life-cycle-stage cross-tabulation.
    pub sex_by_life_cycle: Vec<CrossCount>,

    /// Cases per observed year, ascending.
    pub yearly: Vec<YearCount>,
    /// Headline indicators for the configured years.
    pub indicators: Vec<YearIndicator>,
    /// Percent change from the first to the last observed year;
    /// `None` when undefined (empty series or zero first-year count).
    pub total_variation_pct: Option<f64>,

    /// Sparse department × year breakdown.
    pub department_year: Vec<DepartmentYearCount>,
    /// Selectable department names, alphabetical, sentinel included.
    pub departments: Vec<String>,

    /// Top-N scenes of event.
    pub scenes: Vec<CategoryCount>,
    pub scene_leader: Option<LeadingShare>,
    /// Top-N fatal injury mechanisms.
    pub mechanisms: Vec<CategoryCount>,
    pub mechanism_leader: Option<LeadingShare>,

    /// Top-N reasons, sentinel included.
    pub reasons: Vec<CategoryCount>,
    /// Top-N reasons with the unreported sentinel excluded.
    pub reasons_reported: Vec<CategoryCount>,
}

impl DashboardData {
    /// Serializes the whole bundle for an out-of-process renderer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Computes the full fixed-aggregate bundle.
pub fn build(dataset: &Dataset, config: &DashboardConfig) -> DashboardData {
    let top_n = Some(config.top_n);
    let total = dataset.len();

    let summary = match summarize(dataset) {
        Ok(s) => Some(s),
        Err(e) => {
            logging::warn(
                Stage::Analysis,
                Some("summary"),
                &format!("derivation unavailable: {}", e),
            );
            None
        }
    };

    let yearly = match yearly_counts(dataset) {
        Ok(series) => series,
        Err(e) => {
            logging::warn(
                Stage::Analysis,
                Some("temporal"),
                &format!("derivation unavailable: {}", e),
            );
            Vec::new()
        }
    };
    let indicators = year_indicators(&yearly, &config.indicator_years);
    let total_variation_pct = total_variation(&yearly);

    let life_cycle = count_by(dataset, Field::LifeCycleStage, None, &[]);
    let life_cycle_leader = leading_share(&life_cycle, total);

    let sex = count_by_with_share(dataset, Field::Sex, None, &[]);
    let sex_ratio = sex_ratio(&sex);
    let sex_by_life_cycle = cross_count(dataset, Field::Sex, Field::LifeCycleStage);

    let department_year = by_department_and_year(dataset);
    let departments = department_universe(dataset);

    let scenes = count_by(dataset, Field::Scene, top_n, &[]);
    let scene_leader = leading_share(&scenes, total);
    let mechanisms = count_by(dataset, Field::Mechanism, top_n, &[]);
    let mechanism_leader = leading_share(&mechanisms, total);

    let reasons = count_by(dataset, Field::Reason, top_n, &[]);
    let reasons_reported = count_by(dataset, Field::Reason, top_n, &[NO_INFORMATION]);

    logging::info(
        Stage::Analysis,
        None,
        &format!(
            "fixed aggregates computed over {} records ({} years)",
            total,
            yearly.len()
        ),
    );

    DashboardData {
        summary,
        life_cycle,
        life_cycle_leader,
        sex,
        sex_ratio,
        sex_by_life_cycle,
        yearly,
        indicators,
        total_variation_pct,
        department_year,
        departments,
        scenes,
        scene_leader,
        mechanisms,
        mechanism_leader,
        reasons,
        reasons_reported,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
