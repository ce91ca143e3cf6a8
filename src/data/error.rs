use std::path::PathBuf;

use thiserror::Error;

use super::model::NumericField;

/// The dataset could not be turned into a [`Table`](super::model::Table).
///
/// Fatal for the session: nothing downstream runs without a table.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {} (record {row})", path.display())]
    Csv {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("malformed JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot decode parquet file {}", path.display())]
    Parquet {
        path: PathBuf,
        #[source]
        source: parquet::errors::ParquetError,
    },

    #[error("cannot read record batch from {}", path.display())]
    Arrow {
        path: PathBuf,
        #[source]
        source: arrow::error::ArrowError,
    },

    #[error("{} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("column '{column}' in {} has unsupported type {data_type}", path.display())]
    InvalidColumn {
        path: PathBuf,
        column: &'static str,
        data_type: String,
    },

    #[error("null '{column}' at row {row} of {}", path.display())]
    NullIdentifier {
        path: PathBuf,
        column: &'static str,
        row: usize,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}

/// Ranking was asked to pick from nothing.
///
/// Recoverable: callers check for emptiness first and show a "no data" message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no group has a defined mean for '{field}'")]
pub struct EmptyInputError {
    pub field: NumericField,
}
