use super::model::{NumericField, Table};

/// Summary statistics of one numeric column, over its non-missing values.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; undefined below two values.
    pub std_dev: Option<f64>,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

/// Describe `field`, or `None` when the table holds no value for it.
pub fn describe(table: &Table, field: NumericField) -> Option<FieldStats> {
    let mut vals: Vec<f64> = table.iter().filter_map(|r| field.value(r)).collect();
    if vals.is_empty() {
        return None;
    }
    vals.sort_by(f64::total_cmp);

    let count = vals.len();
    let mean = vals.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 0 {
        (vals[count / 2 - 1] + vals[count / 2]) / 2.0
    } else {
        vals[count / 2]
    };
    let std_dev = (count > 1).then(|| {
        let ss: f64 = vals.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    });

    Some(FieldStats {
        count,
        mean,
        std_dev,
        min: vals[0],
        median,
        max: vals[count - 1],
    })
}

/// [`describe`] for every numeric column that has at least one value.
pub fn describe_all(table: &Table) -> Vec<(NumericField, FieldStats)> {
    NumericField::ALL
        .into_iter()
        .filter_map(|field| describe(table, field).map(|stats| (field, stats)))
        .collect()
}
