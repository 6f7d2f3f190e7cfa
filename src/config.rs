/// Service configuration loaded from `forensis.toml`.
///
/// Everything has a sensible default: a missing config file is not an
/// error, only a malformed one is. The config names the data file and
/// the presentation knobs (indicator years, top-N cutoff); it carries no
/// secrets and no runtime state.

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::analysis::temporal::DEFAULT_INDICATOR_YEARS;
use crate::logging::{self, Stage};

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./forensis.toml";

/// Default location of the Medicina Legal export.
pub const DEFAULT_DATA_PATH: &str = "./data/PresuntosSuicidios.csv";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Path to the source CSV.
    pub data_path: String,
    /// Years shown as headline indicators, oldest first. The delta of
    /// the first listed year is defined as zero (no prior reference).
    pub indicator_years: Vec<i32>,
    /// Cutoff for the top-N categorical views (scenes, mechanisms,
    /// fixed reason views).
    pub top_n: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            indicator_years: DEFAULT_INDICATOR_YEARS.to_vec(),
            top_n: 10,
        }
    }
}

/// Loads the config file, falling back to defaults when it is absent.
///
/// A file that exists but does not parse is an error — silently ignoring
/// a typo in a present config would be worse than failing.
pub fn load_or_default(path: &Path) -> Result<DashboardConfig, Box<dyn Error>> {
    if !path.exists() {
        logging::info(
            Stage::Config,
            None,
            &format!("no config file at {}, using defaults", path.display()),
        );
        return Ok(DashboardConfig::default());
    }

    let text = fs::read_to_string(path)?;
    let config: DashboardConfig = toml::from_str(&text)?;
    logging::info(
        Stage::Config,
        None,
        &format!("loaded configuration from {}", path.display()),
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_path, DEFAULT_DATA_PATH);
        assert_eq!(config.indicator_years, vec![2021, 2022, 2023, 2024]);
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_or_default(Path::new("./definitely-not-here.toml"))
            .expect("missing file should not be an error");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_omitted_keys() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp config");
        writeln!(file, "data_path = \"/srv/data/suicidios.csv\"").expect("write temp config");

        let config = load_or_default(file.path()).expect("partial config should parse");
        assert_eq!(config.data_path, "/srv/data/suicidios.csv");
        assert_eq!(config.indicator_years, DEFAULT_INDICATOR_YEARS.to_vec());
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp config");
        writeln!(file, "top_n = \"ten\"").expect("write temp config");

        assert!(
            load_or_default(file.path()).is_err(),
            "a present but malformed config must fail loudly"
        );
    }
}
