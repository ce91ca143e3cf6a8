use std::fmt;

use super::model::{CategoricalField, Table};

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

/// Selector label that disables the filter.
pub const ALL: &str = "All";

/// Which categorical value a view is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No constraint: the table passes through unchanged.
    #[default]
    All,
    /// Keep rows whose value matches, ignoring case.
    Value(String),
}

impl CategoryFilter {
    /// Interpret a selector label; the sentinel [`ALL`] disables filtering.
    pub fn from_selection(label: &str) -> Self {
        if label == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Value(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Value(v) => v,
        }
    }

    /// A missing value never matches a concrete filter.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Value(wanted) => {
                value.is_some_and(|v| v.to_lowercase() == wanted.to_lowercase())
            }
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rows whose `field` matches `filter`, in table order.
///
/// An empty result is a valid table, not an error.
pub fn filter_by_category(table: &Table, field: CategoricalField, filter: &CategoryFilter) -> Table {
    match filter {
        CategoryFilter::All => table.clone(),
        CategoryFilter::Value(_) => table
            .iter()
            .filter(|r| filter.matches(field.value(r)))
            .cloned()
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Row window
// ---------------------------------------------------------------------------

/// Which end of the table a window is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowDirection {
    #[default]
    First,
    Last,
}

impl WindowDirection {
    pub const ALL: [WindowDirection; 2] = [WindowDirection::First, WindowDirection::Last];

    pub fn label(self) -> &'static str {
        match self {
            WindowDirection::First => "First",
            WindowDirection::Last => "Last",
        }
    }
}

impl fmt::Display for WindowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The first or last `min(n, len)` rows, in table order.
pub fn window(table: &Table, direction: WindowDirection, n: usize) -> Table {
    let take = n.min(table.len());
    let rows = match direction {
        WindowDirection::First => &table.records()[..take],
        WindowDirection::Last => &table.records()[table.len() - take..],
    };
    Table::new(rows.to_vec())
}
