use super::aggregate::GroupSummary;
use super::error::EmptyInputError;
use super::model::{NumericField, Table};

// ---------------------------------------------------------------------------
// Group ranking: exactly one winner
// ---------------------------------------------------------------------------

/// The summary with the highest unrounded mean of `field`.
///
/// Ties go to the summary that comes first. Summaries with an undefined mean
/// are skipped; if none is left the call fails.
pub fn argmax_by(
    summaries: &[GroupSummary],
    field: NumericField,
) -> Result<&GroupSummary, EmptyInputError> {
    extreme_by(summaries, field, |candidate, best| candidate > best)
}

/// The summary with the lowest unrounded mean of `field`. Same tie rule as
/// [`argmax_by`].
pub fn argmin_by(
    summaries: &[GroupSummary],
    field: NumericField,
) -> Result<&GroupSummary, EmptyInputError> {
    extreme_by(summaries, field, |candidate, best| candidate < best)
}

fn extreme_by(
    summaries: &[GroupSummary],
    field: NumericField,
    beats: impl Fn(f64, f64) -> bool,
) -> Result<&GroupSummary, EmptyInputError> {
    let mut best: Option<(&GroupSummary, f64)> = None;
    for summary in summaries {
        let Some(value) = summary.mean(field) else {
            continue;
        };
        // Strict comparison keeps the earliest of equal values.
        if best.map_or(true, |(_, current)| beats(value, current)) {
            best = Some((summary, value));
        }
    }
    best.map(|(summary, _)| summary)
        .ok_or(EmptyInputError { field })
}

/// How a bar is emphasised in the comparison charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Highest,
    Lowest,
    Neutral,
}

/// Mark the summaries holding the maximum and minimum mean of `field`.
///
/// Every summary equal to an extreme is marked; a value that is both the
/// maximum and the minimum counts as [`Highlight::Highest`].
pub fn highlights(summaries: &[GroupSummary], field: NumericField) -> Vec<Highlight> {
    let max = argmax_by(summaries, field).ok().and_then(|s| s.mean(field));
    let min = argmin_by(summaries, field).ok().and_then(|s| s.mean(field));

    summaries
        .iter()
        .map(|s| match s.mean(field) {
            Some(v) if Some(v) == max => Highlight::Highest,
            Some(v) if Some(v) == min => Highlight::Lowest,
            _ => Highlight::Neutral,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Record ranking: every tied record
// ---------------------------------------------------------------------------

/// Largest non-missing value of `field` in the table.
pub fn table_max(table: &Table, field: NumericField) -> Option<f64> {
    table
        .iter()
        .filter_map(|r| field.value(r))
        .reduce(f64::max)
}

/// Every record whose `field` equals the table-wide maximum, in table order.
pub fn select_by_max(table: &Table, field: NumericField) -> Table {
    let Some(max) = table_max(table, field) else {
        return Table::default();
    };
    table
        .iter()
        .filter(|r| field.value(r) == Some(max))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::{aggregate_mean, MissingPolicy};
    use crate::data::model::tests::person;
    use crate::data::model::{CategoricalField, Record};

    fn stress_by_occupation(rows: &[(&str, f64)]) -> Vec<GroupSummary> {
        let table = rows
            .iter()
            .enumerate()
            .map(|(i, (occupation, stress))| person(i as i64 + 1, "Male", occupation, *stress))
            .collect::<Table>();
        aggregate_mean(
            &table,
            CategoricalField::Occupation,
            &[NumericField::StressLevel],
            MissingPolicy::PerField,
        )
    }

    #[test]
    fn picks_the_extremes() {
        let summaries = stress_by_occupation(&[("Doctor", 6.0), ("Nurse", 8.0), ("Teacher", 3.0)]);
        assert_eq!(argmax_by(&summaries, NumericField::StressLevel).unwrap().key(), "Nurse");
        assert_eq!(argmin_by(&summaries, NumericField::StressLevel).unwrap().key(), "Teacher");
    }

    #[test]
    fn ties_resolve_to_the_first_summary() {
        let summaries = stress_by_occupation(&[
            ("Teacher", 2.0),
            ("Doctor", 7.0),
            ("Nurse", 7.0),
            ("Lawyer", 2.0),
        ]);
        for _ in 0..3 {
            assert_eq!(argmax_by(&summaries, NumericField::StressLevel).unwrap().key(), "Doctor");
            assert_eq!(argmin_by(&summaries, NumericField::StressLevel).unwrap().key(), "Teacher");
        }
    }

    #[test]
    fn ranking_nothing_fails() {
        let err = argmax_by(&[], NumericField::StressLevel).unwrap_err();
        assert_eq!(err, EmptyInputError { field: NumericField::StressLevel });

        // Groups exist but none has a value for the field.
        let summaries = stress_by_occupation(&[("Doctor", 6.0)]);
        assert!(argmin_by(&summaries, NumericField::SleepDuration).is_err());
    }

    #[test]
    fn undefined_means_are_not_candidates() {
        let mut silent = person(2, "Male", "Pilot", 0.0);
        silent.stress_level = None;
        let table = Table::new(vec![silent, person(1, "Male", "Doctor", 5.0)]);
        let summaries = aggregate_mean(
            &table,
            CategoricalField::Occupation,
            &[NumericField::StressLevel],
            MissingPolicy::PerField,
        );
        assert_eq!(argmax_by(&summaries, NumericField::StressLevel).unwrap().key(), "Doctor");
        assert_eq!(argmin_by(&summaries, NumericField::StressLevel).unwrap().key(), "Doctor");
    }

    #[test]
    fn highlights_mark_every_extreme() {
        let summaries = stress_by_occupation(&[
            ("Doctor", 6.0),
            ("Nurse", 8.0),
            ("Teacher", 3.0),
            ("Lawyer", 8.0),
        ]);
        assert_eq!(
            highlights(&summaries, NumericField::StressLevel),
            [Highlight::Neutral, Highlight::Highest, Highlight::Lowest, Highlight::Highest]
        );

        let single = stress_by_occupation(&[("Doctor", 6.0)]);
        assert_eq!(highlights(&single, NumericField::StressLevel), [Highlight::Highest]);
    }

    fn with_quality(id: i64, quality: Option<f64>) -> Record {
        Record {
            quality_of_sleep: quality,
            ..person(id, "Female", "Nurse", 4.0)
        }
    }

    #[test]
    fn select_by_max_keeps_all_ties_in_order() {
        let table = Table::new(vec![
            with_quality(1, Some(9.0)),
            with_quality(2, Some(7.0)),
            with_quality(3, Some(9.0)),
            with_quality(4, Some(8.0)),
        ]);
        let best = select_by_max(&table, NumericField::QualityOfSleep);

        assert_eq!(table_max(&table, NumericField::QualityOfSleep), Some(9.0));
        assert_eq!(best.iter().map(|r| r.person_id).collect::<Vec<_>>(), [1, 3]);
    }

    #[test]
    fn select_by_max_on_empty_or_missing_is_empty() {
        assert!(select_by_max(&Table::default(), NumericField::QualityOfSleep).is_empty());

        let table = Table::new(vec![with_quality(1, None), with_quality(2, None)]);
        assert!(select_by_max(&table, NumericField::QualityOfSleep).is_empty());
    }
}
