use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Record – one row of the survey
// ---------------------------------------------------------------------------

/// One person's survey answers (one row of the source file).
///
/// Missing cells deserialize to `None`; nothing is imputed. `NaN` and
/// infinite numbers count as missing too.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Record {
    #[serde(rename = "Person ID")]
    pub person_id: i64,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Age", default, deserialize_with = "finite_or_missing")]
    pub age: Option<f64>,
    #[serde(rename = "Occupation")]
    pub occupation: Option<String>,
    /// Hours per night.
    #[serde(rename = "Sleep Duration", default, deserialize_with = "finite_or_missing")]
    pub sleep_duration: Option<f64>,
    /// Self-reported score, 1–10.
    #[serde(rename = "Quality of Sleep", default, deserialize_with = "finite_or_missing")]
    pub quality_of_sleep: Option<f64>,
    /// Minutes of activity per day.
    #[serde(rename = "Physical Activity Level", default, deserialize_with = "finite_or_missing")]
    pub physical_activity_level: Option<f64>,
    /// Self-reported score, 1–10.
    #[serde(rename = "Stress Level", default, deserialize_with = "finite_or_missing")]
    pub stress_level: Option<f64>,

    // Lifestyle columns carried for display only; the file may omit them.
    #[serde(rename = "BMI Category", default)]
    pub bmi_category: Option<String>,
    #[serde(rename = "Blood Pressure", default)]
    pub blood_pressure: Option<String>,
    #[serde(rename = "Heart Rate", default, deserialize_with = "finite_or_missing")]
    pub heart_rate: Option<f64>,
    #[serde(rename = "Daily Steps", default, deserialize_with = "finite_or_missing")]
    pub daily_steps: Option<f64>,
    #[serde(rename = "Sleep Disorder", default)]
    pub sleep_disorder: Option<String>,
}

/// Only finite numbers are values; everything else is missing.
pub(crate) fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn finite_or_missing<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.and_then(finite))
}

// ---------------------------------------------------------------------------
// Typed column selectors
// ---------------------------------------------------------------------------

/// String-valued columns that can be filtered on or grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoricalField {
    Gender,
    Occupation,
}

impl CategoricalField {
    /// Header name in the source file.
    pub fn column(self) -> &'static str {
        match self {
            CategoricalField::Gender => "Gender",
            CategoricalField::Occupation => "Occupation",
        }
    }

    pub fn value(self, record: &Record) -> Option<&str> {
        match self {
            CategoricalField::Gender => record.gender.as_deref(),
            CategoricalField::Occupation => record.occupation.as_deref(),
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Real-valued columns that can be averaged and ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericField {
    Age,
    SleepDuration,
    QualityOfSleep,
    PhysicalActivityLevel,
    StressLevel,
}

impl NumericField {
    pub const ALL: [NumericField; 5] = [
        NumericField::Age,
        NumericField::SleepDuration,
        NumericField::QualityOfSleep,
        NumericField::PhysicalActivityLevel,
        NumericField::StressLevel,
    ];

    /// Header name in the source file.
    pub fn column(self) -> &'static str {
        match self {
            NumericField::Age => "Age",
            NumericField::SleepDuration => "Sleep Duration",
            NumericField::QualityOfSleep => "Quality of Sleep",
            NumericField::PhysicalActivityLevel => "Physical Activity Level",
            NumericField::StressLevel => "Stress Level",
        }
    }

    pub fn value(self, record: &Record) -> Option<f64> {
        match self {
            NumericField::Age => record.age,
            NumericField::SleepDuration => record.sleep_duration,
            NumericField::QualityOfSleep => record.quality_of_sleep,
            NumericField::PhysicalActivityLevel => record.physical_activity_level,
            NumericField::StressLevel => record.stress_level,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Table – the loaded dataset
// ---------------------------------------------------------------------------

/// An ordered, immutable sequence of records. Order is the input file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-missing values of `field`, in first-appearance order.
    pub fn distinct_values(&self, field: CategoricalField) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|r| field.value(r))
            .collect::<IndexSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
