use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::color::ColorMap;
use crate::config::{DashboardConfig, ROW_COUNT_RANGE};
use crate::data::filter::{filter_by_category, window, CategoryFilter, WindowDirection, ALL};
use crate::data::loader::load_file;
use crate::data::model::{CategoricalField, Table};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Only the loaded table and the control values live here; every filtered or
/// windowed view is recomputed from them when asked for.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub table: Option<Table>,

    /// File the table came from.
    pub source: Option<PathBuf>,

    /// Selector entries: "All" followed by the distinct genders.
    pub gender_options: Vec<String>,

    /// Current gender selection.
    pub gender_filter: CategoryFilter,

    /// Show the first or the last rows.
    pub direction: WindowDirection,

    /// Number of rows to show, within [`ROW_COUNT_RANGE`].
    pub row_count: usize,

    /// Colours for the scatter plot, keyed by gender.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            table: None,
            source: None,
            gender_options: vec![ALL.to_string()],
            gender_filter: CategoryFilter::All,
            direction: WindowDirection::First,
            row_count: config.default_row_count,
            color_map: None,
            status_message: None,
        }
    }

    /// Load a file and make it the session's table. On failure the previous
    /// table (if any) is kept and the error is shown in the status bar.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let loaded = load_file(path).with_context(|| format!("loading {}", path.display()));
        match loaded {
            Ok(table) => {
                self.set_table(table, path.to_path_buf());
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                Err(e)
            }
        }
    }

    /// Ingest a newly loaded table and reset the controls that depend on it.
    pub fn set_table(&mut self, table: Table, source: PathBuf) {
        let genders = table.distinct_values(CategoricalField::Gender);
        log::info!(
            "Dataset {} has {} records, genders {:?}",
            source.display(),
            table.len(),
            genders
        );

        self.color_map = Some(ColorMap::new(CategoricalField::Gender, &genders));
        self.gender_options = std::iter::once(ALL.to_string()).chain(genders).collect();
        self.gender_filter = CategoryFilter::All;
        self.table = Some(table);
        self.source = Some(source);
        self.status_message = None;
    }

    /// Select a gender by its selector label.
    pub fn select_gender(&mut self, label: &str) {
        self.gender_filter = CategoryFilter::from_selection(label);
    }

    /// Set the row count, clamped to the slider bounds.
    pub fn set_row_count(&mut self, n: usize) {
        self.row_count = n.clamp(*ROW_COUNT_RANGE.start(), *ROW_COUNT_RANGE.end());
    }

    /// The table narrowed to the selected gender.
    pub fn filtered(&self) -> Table {
        self.table
            .as_ref()
            .map(|t| filter_by_category(t, CategoricalField::Gender, &self.gender_filter))
            .unwrap_or_default()
    }

    /// The filtered table cut to the selected window.
    pub fn view(&self) -> Table {
        window(&self.filtered(), self.direction, self.row_count)
    }

    /// Heading above the interactive view.
    pub fn view_heading(&self) -> String {
        format!(
            "Showing {} {} rows for gender: {}",
            self.direction.label().to_lowercase(),
            self.row_count,
            self.gender_filter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::person;

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_table(
            Table::new(vec![
                person(1, "Male", "Doctor", 6.0),
                person(2, "Female", "Nurse", 4.0),
                person(3, "Male", "Engineer", 8.0),
                person(4, "Female", "Teacher", 5.0),
                person(5, "Male", "Lawyer", 7.0),
                person(6, "Female", "Nurse", 3.0),
            ]),
            PathBuf::from("memory.csv"),
        );
        state
    }

    fn ids(table: &Table) -> Vec<i64> {
        table.iter().map(|r| r.person_id).collect()
    }

    #[test]
    fn options_start_with_all() {
        let state = loaded();
        assert_eq!(state.gender_options, ["All", "Male", "Female"]);
        assert_eq!(state.gender_filter, CategoryFilter::All);
        assert_eq!(state.row_count, 5);
    }

    #[test]
    fn view_applies_filter_then_window() {
        let mut state = loaded();
        assert_eq!(ids(&state.view()), [1, 2, 3, 4, 5]);

        state.select_gender("Female");
        state.direction = WindowDirection::Last;
        state.set_row_count(2);
        assert_eq!(ids(&state.view()), [4, 6]);
        assert_eq!(state.view_heading(), "Showing last 2 rows for gender: Female");
    }

    #[test]
    fn row_count_stays_in_slider_range() {
        let mut state = loaded();
        state.set_row_count(0);
        assert_eq!(state.row_count, 1);
        state.set_row_count(50);
        assert_eq!(state.row_count, 20);
    }

    #[test]
    fn failed_load_keeps_the_previous_table() {
        let mut state = loaded();
        let err = state.load_path(Path::new("missing/dataset.csv")).unwrap_err();

        assert!(format!("{err:#}").contains("missing/dataset.csv"));
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
        assert_eq!(state.table.as_ref().map(Table::len), Some(6));
    }

    #[test]
    fn nothing_loaded_means_empty_views() {
        let state = AppState::default();
        assert!(state.filtered().is_empty());
        assert!(state.view().is_empty());
    }
}
