use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use arrow::array::{Array, AsArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::error::DataLoadError;
use super::model::{finite, Record, Table};

/// Columns every input file must carry. Validated once, before any row is read.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Person ID",
    "Gender",
    "Age",
    "Occupation",
    "Sleep Duration",
    "Quality of Sleep",
    "Physical Activity Level",
    "Stress Level",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the survey table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.tsv` – header row, one record per line, empty cell = missing
/// * `.json`         – `[{ "Person ID": 1, "Gender": "Male", ... }, ...]`
/// * `.parquet`      – one column per header name, nulls = missing
pub fn load_file(path: &Path) -> Result<Table, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    log::debug!("Loading {} as '{ext}'", path.display());

    let table = match ext.as_str() {
        "csv" => read_delimited(open(path)?, b',', path)?,
        "tsv" => read_delimited(open(path)?, b'\t', path)?,
        "json" => read_json(open(path)?, path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(DataLoadError::UnsupportedFormat(other.to_string())),
    };

    log::info!("Loaded {} records from {}", table.len(), path.display());
    Ok(table)
}

fn open(path: &Path) -> Result<File, DataLoadError> {
    File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn require_columns(path: &Path, has: impl Fn(&str) -> bool) -> Result<(), DataLoadError> {
    match REQUIRED_COLUMNS.iter().copied().find(|col| !has(col)) {
        Some(column) => Err(DataLoadError::MissingColumn {
            path: path.to_path_buf(),
            column,
        }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

/// Parse delimited text with a header row. `path` only labels errors.
pub(crate) fn read_delimited<R: Read>(
    reader: R,
    delimiter: u8,
    path: &Path,
) -> Result<Table, DataLoadError> {
    let csv_error = |row: usize, source: csv::Error| DataLoadError::Csv {
        path: path.to_path_buf(),
        row,
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers().map_err(|e| csv_error(0, e))?.clone();
    require_columns(path, |col| headers.iter().any(|h| h == col))?;

    let records = reader
        .deserialize::<Record>()
        .enumerate()
        .map(|(row_no, result)| result.map_err(|e| csv_error(row_no + 1, e)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Table::new(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (`df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Person ID": 1, "Gender": "Male", "Age": 27, "Stress Level": 6, ... },
///   ...
/// ]
/// ```
///
/// Every object must name every required column; `null` marks a missing value.
pub(crate) fn read_json<R: Read>(reader: R, path: &Path) -> Result<Table, DataLoadError> {
    let json_error = |source| DataLoadError::Json {
        path: path.to_path_buf(),
        source,
    };

    let rows: Vec<Map<String, JsonValue>> =
        serde_json::from_reader(BufReader::new(reader)).map_err(json_error)?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        require_columns(path, |col| row.contains_key(col))?;
        records.push(serde_json::from_value(JsonValue::Object(row)).map_err(json_error)?);
    }

    Ok(Table::new(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas (`df.to_parquet()`) or Polars.
///
/// Numeric columns may be any integer or float type; categorical columns may
/// be plain or dictionary-encoded strings.
fn load_parquet(path: &Path) -> Result<Table, DataLoadError> {
    let parquet_error = |source| DataLoadError::Parquet {
        path: path.to_path_buf(),
        source,
    };

    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?).map_err(parquet_error)?;
    let schema = builder.schema().clone();
    require_columns(path, |col| schema.index_of(col).is_ok())?;
    let reader = builder.build().map_err(parquet_error)?;

    let mut records = Vec::new();
    for batch in reader {
        let batch = batch.map_err(|source| DataLoadError::Arrow {
            path: path.to_path_buf(),
            source,
        })?;
        records.extend(batch_records(&batch, path, records.len())?);
    }

    Ok(Table::new(records))
}

fn batch_records(
    batch: &RecordBatch,
    path: &Path,
    offset: usize,
) -> Result<Vec<Record>, DataLoadError> {
    let ids = id_column(batch, path, "Person ID")?;
    let gender = string_column(batch, path, "Gender")?;
    let occupation = string_column(batch, path, "Occupation")?;
    let age = numeric_column(batch, path, "Age")?;
    let sleep_duration = numeric_column(batch, path, "Sleep Duration")?;
    let quality = numeric_column(batch, path, "Quality of Sleep")?;
    let activity = numeric_column(batch, path, "Physical Activity Level")?;
    let stress = numeric_column(batch, path, "Stress Level")?;
    let bmi = string_column(batch, path, "BMI Category")?;
    let blood_pressure = string_column(batch, path, "Blood Pressure")?;
    let heart_rate = numeric_column(batch, path, "Heart Rate")?;
    let daily_steps = numeric_column(batch, path, "Daily Steps")?;
    let disorder = string_column(batch, path, "Sleep Disorder")?;

    let ids = ids.ok_or_else(|| DataLoadError::MissingColumn {
        path: path.to_path_buf(),
        column: "Person ID",
    })?;

    (0..batch.num_rows())
        .map(|row| {
            if ids.is_null(row) {
                return Err(DataLoadError::NullIdentifier {
                    path: path.to_path_buf(),
                    column: "Person ID",
                    row: offset + row,
                });
            }
            Ok(Record {
                person_id: ids.value(row),
                gender: str_at(&gender, row),
                age: f64_at(&age, row),
                occupation: str_at(&occupation, row),
                sleep_duration: f64_at(&sleep_duration, row),
                quality_of_sleep: f64_at(&quality, row),
                physical_activity_level: f64_at(&activity, row),
                stress_level: f64_at(&stress, row),
                bmi_category: str_at(&bmi, row),
                blood_pressure: str_at(&blood_pressure, row),
                heart_rate: f64_at(&heart_rate, row),
                daily_steps: f64_at(&daily_steps, row),
                sleep_disorder: str_at(&disorder, row),
            })
        })
        .collect()
}

// -- Parquet / Arrow helpers --

fn arrow_error(path: &Path) -> impl Fn(arrow::error::ArrowError) -> DataLoadError + '_ {
    move |source| DataLoadError::Arrow {
        path: path.to_path_buf(),
        source,
    }
}

fn invalid_column(path: &Path, column: &'static str, data_type: &DataType) -> DataLoadError {
    DataLoadError::InvalidColumn {
        path: path.to_path_buf(),
        column,
        data_type: data_type.to_string(),
    }
}

fn id_column(
    batch: &RecordBatch,
    path: &Path,
    column: &'static str,
) -> Result<Option<Int64Array>, DataLoadError> {
    let Some(col) = batch.column_by_name(column) else {
        return Ok(None);
    };
    if !col.data_type().is_integer() {
        return Err(invalid_column(path, column, col.data_type()));
    }
    let cast = arrow::compute::cast(col, &DataType::Int64).map_err(arrow_error(path))?;
    Ok(Some(cast.as_primitive::<Int64Type>().clone()))
}

/// Any integer or float column, widened to `f64`.
fn numeric_column(
    batch: &RecordBatch,
    path: &Path,
    column: &'static str,
) -> Result<Option<Float64Array>, DataLoadError> {
    let Some(col) = batch.column_by_name(column) else {
        return Ok(None);
    };
    if !col.data_type().is_numeric() {
        return Err(invalid_column(path, column, col.data_type()));
    }
    let cast = arrow::compute::cast(col, &DataType::Float64).map_err(arrow_error(path))?;
    Ok(Some(cast.as_primitive::<Float64Type>().clone()))
}

/// Plain or dictionary-encoded string column, normalised to `Utf8`.
fn string_column(
    batch: &RecordBatch,
    path: &Path,
    column: &'static str,
) -> Result<Option<StringArray>, DataLoadError> {
    let Some(col) = batch.column_by_name(column) else {
        return Ok(None);
    };
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View | DataType::Dictionary(_, _) => {}
        other => return Err(invalid_column(path, column, other)),
    }
    let cast = arrow::compute::cast(col, &DataType::Utf8).map_err(arrow_error(path))?;
    Ok(Some(cast.as_string::<i32>().clone()))
}

fn f64_at(col: &Option<Float64Array>, row: usize) -> Option<f64> {
    col.as_ref()
        .filter(|c| c.is_valid(row))
        .and_then(|c| finite(c.value(row)))
}

fn str_at(col: &Option<StringArray>, row: usize) -> Option<String> {
    col.as_ref()
        .filter(|c| c.is_valid(row))
        .map(|c| c.value(row).to_string())
}
