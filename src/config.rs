use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Dataset location relative to the working directory.
pub const DEFAULT_DATASET: &str = "assets/sleep_health_and_lifestyle_dataset.csv";

/// Environment variable that overrides [`DEFAULT_DATASET`].
pub const DATASET_ENV: &str = "SLEEP_LENS_DATASET";

/// Bounds of the "number of rows" slider.
pub const ROW_COUNT_RANGE: RangeInclusive<usize> = 1..=20;

/// Rows shown in the fixed head / tail previews.
pub const PREVIEW_ROWS: usize = 5;

/// Startup settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub default_row_count: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            default_row_count: PREVIEW_ROWS,
        }
    }
}

impl DashboardConfig {
    /// Defaults, with the dataset path taken from [`DATASET_ENV`] when set.
    pub fn from_env() -> Self {
        Self::with_dataset_override(std::env::var_os(DATASET_ENV).map(PathBuf::from))
    }

    fn with_dataset_override(dataset: Option<PathBuf>) -> Self {
        let mut config = Self::default();
        if let Some(path) = dataset.filter(|p| !p.as_os_str().is_empty()) {
            log::debug!("Dataset path overridden by {DATASET_ENV}: {}", path.display());
            config.dataset_path = path;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_bundled_dataset() {
        let config = DashboardConfig::default();
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET));
        assert!(ROW_COUNT_RANGE.contains(&config.default_row_count));
    }

    #[test]
    fn override_replaces_the_path_unless_blank() {
        let config = DashboardConfig::with_dataset_override(Some("data/other.json".into()));
        assert_eq!(config.dataset_path, PathBuf::from("data/other.json"));

        let blank = DashboardConfig::with_dataset_override(Some(PathBuf::new()));
        assert_eq!(blank, DashboardConfig::default());
    }
}
