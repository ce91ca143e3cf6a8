use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::model::{CategoricalField, NumericField, Record, Table};

/// How missing numeric values are treated when averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Each mean skips only the records missing that field.
    #[default]
    PerField,
    /// A record counts only when every requested field is present.
    CompleteRows,
}

/// Per-group means for one distinct value of the grouping column.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    key: String,
    count: usize,
    /// Full precision; `None` when the group had no value for the field.
    means: BTreeMap<NumericField, Option<f64>>,
}

impl GroupSummary {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Records that contributed to this group.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Unrounded mean; what ranking compares.
    pub fn mean(&self, field: NumericField) -> Option<f64> {
        self.means.get(&field).copied().flatten()
    }

    /// Mean rounded to 2 decimals for display.
    pub fn rounded_mean(&self, field: NumericField) -> Option<f64> {
        self.mean(field).map(round2)
    }
}

/// Round half away from zero to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, Default)]
struct MeanAccumulator {
    sum: f64,
    n: usize,
}

impl MeanAccumulator {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.n += 1;
        }
    }

    fn mean(self) -> Option<f64> {
        (self.n > 0).then(|| self.sum / self.n as f64)
    }
}

/// Group `table` by `group_by` and average each of `fields`.
///
/// Groups appear in first-appearance order. Records without a group key are
/// skipped. An empty table yields no summaries.
pub fn aggregate_mean(
    table: &Table,
    group_by: CategoricalField,
    fields: &[NumericField],
    policy: MissingPolicy,
) -> Vec<GroupSummary> {
    let mut groups: IndexMap<&str, (usize, Vec<MeanAccumulator>)> = IndexMap::new();

    for record in table {
        let Some(key) = group_by.value(record) else {
            continue;
        };
        if policy == MissingPolicy::CompleteRows && !is_complete(record, fields) {
            continue;
        }
        let (count, accs) = groups
            .entry(key)
            .or_insert_with(|| (0, vec![MeanAccumulator::default(); fields.len()]));
        *count += 1;
        for (acc, field) in accs.iter_mut().zip(fields) {
            acc.push(field.value(record));
        }
    }

    groups
        .into_iter()
        .map(|(key, (count, accs))| GroupSummary {
            key: key.to_string(),
            count,
            means: fields
                .iter()
                .copied()
                .zip(accs.into_iter().map(MeanAccumulator::mean))
                .collect(),
        })
        .collect()
}

fn is_complete(record: &Record, fields: &[NumericField]) -> bool {
    fields.iter().all(|f| f.value(record).is_some())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::model::tests::person;

    #[test]
    fn means_are_computed_per_group() {
        let table = Table::new(vec![
            person(1, "Male", "Doctor", 6.0),
            person(2, "Female", "Nurse", 4.0),
            person(3, "Male", "Engineer", 8.0),
        ]);
        let summaries = aggregate_mean(
            &table,
            CategoricalField::Gender,
            &[NumericField::StressLevel],
            MissingPolicy::PerField,
        );

        let male = summaries.iter().find(|s| s.key() == "Male").unwrap();
        let female = summaries.iter().find(|s| s.key() == "Female").unwrap();
        assert_eq!(male.rounded_mean(NumericField::StressLevel), Some(7.00));
        assert_eq!(male.count(), 2);
        assert_eq!(female.rounded_mean(NumericField::StressLevel), Some(4.00));
    }

    #[test]
    fn key_set_matches_distinct_values() {
        let mut unknown = person(5, "Male", "", 3.0);
        unknown.occupation = None;
        let table = Table::new(vec![
            person(1, "Male", "Doctor", 6.0),
            person(2, "Female", "Nurse", 4.0),
            person(3, "Male", "Nurse", 8.0),
            person(4, "Female", "Teacher", 5.0),
            unknown,
        ]);
        let summaries = aggregate_mean(
            &table,
            CategoricalField::Occupation,
            &[NumericField::StressLevel],
            MissingPolicy::PerField,
        );

        let keys: Vec<&str> = summaries.iter().map(GroupSummary::key).collect();
        let unique: BTreeSet<&str> = keys.iter().copied().collect();
        assert_eq!(keys.len(), unique.len());
        assert_eq!(unique, BTreeSet::from(["Doctor", "Nurse", "Teacher"]));
    }

    #[test]
    fn missing_values_are_excluded_per_field() {
        let mut no_stress = person(2, "Male", "Doctor", 0.0);
        no_stress.stress_level = None;
        no_stress.sleep_duration = Some(8.0);
        let mut first = person(1, "Male", "Doctor", 6.0);
        first.sleep_duration = Some(6.0);
        let table = Table::new(vec![first, no_stress]);

        let fields = [NumericField::StressLevel, NumericField::SleepDuration];
        let per_field = aggregate_mean(&table, CategoricalField::Gender, &fields, MissingPolicy::PerField);
        assert_eq!(per_field[0].mean(NumericField::StressLevel), Some(6.0));
        assert_eq!(per_field[0].mean(NumericField::SleepDuration), Some(7.0));
        assert_eq!(per_field[0].count(), 2);

        let complete = aggregate_mean(&table, CategoricalField::Gender, &fields, MissingPolicy::CompleteRows);
        assert_eq!(complete[0].mean(NumericField::SleepDuration), Some(6.0));
        assert_eq!(complete[0].count(), 1);
    }

    #[test]
    fn group_without_values_has_undefined_mean() {
        let mut r = person(1, "Female", "Nurse", 0.0);
        r.stress_level = None;
        let table = Table::new(vec![r]);
        let summaries = aggregate_mean(
            &table,
            CategoricalField::Gender,
            &[NumericField::StressLevel],
            MissingPolicy::PerField,
        );

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].mean(NumericField::StressLevel), None);
        assert_eq!(summaries[0].rounded_mean(NumericField::StressLevel), None);
    }

    #[test]
    fn rounding_is_display_only() {
        let table = Table::new(vec![
            person(1, "Male", "Doctor", 1.0),
            person(2, "Male", "Doctor", 2.0),
            person(3, "Male", "Doctor", 2.0),
        ]);
        let summaries = aggregate_mean(
            &table,
            CategoricalField::Gender,
            &[NumericField::StressLevel],
            MissingPolicy::PerField,
        );

        assert_eq!(summaries[0].mean(NumericField::StressLevel), Some(5.0 / 3.0));
        assert_eq!(summaries[0].rounded_mean(NumericField::StressLevel), Some(1.67));
        assert_eq!(summaries[0].mean(NumericField::Age), None);
    }

    #[test]
    fn empty_table_has_no_groups() {
        let summaries = aggregate_mean(
            &Table::default(),
            CategoricalField::Gender,
            &NumericField::ALL,
            MissingPolicy::PerField,
        );
        assert!(summaries.is_empty());
    }
}
