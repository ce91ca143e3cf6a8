//! Dashboard sections assembled from the pipeline stages.

use super::aggregate::{aggregate_mean, GroupSummary, MissingPolicy};
use super::model::{CategoricalField, NumericField, Table};
use super::rank::{argmax_by, argmin_by, select_by_max, table_max};

/// Shown wherever a ranking would have nothing to pick from.
pub const NO_DATA: &str = "No data available for the selected filters.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Max,
    Min,
}

/// One sentence naming the best (or worst) group for a metric.
#[derive(Debug, Clone, Copy)]
pub struct CalloutSpec {
    pub field: NumericField,
    pub extreme: Extreme,
    /// E.g. "gender with better average sleep quality".
    pub subject: &'static str,
    /// Placed before the value, e.g. "a score of ".
    pub lead: &'static str,
    /// Placed after the value, e.g. " hours on average".
    pub unit: &'static str,
}

impl CalloutSpec {
    /// Render against `summaries`; `None` when nothing can be ranked.
    pub fn render(&self, summaries: &[GroupSummary]) -> Option<String> {
        let winner = match self.extreme {
            Extreme::Max => argmax_by(summaries, self.field),
            Extreme::Min => argmin_by(summaries, self.field),
        }
        .ok()?;
        let value = winner.rounded_mean(self.field)?;
        Some(format!(
            "The {} is {} with {}{value:.2}{}.",
            self.subject,
            winner.key(),
            self.lead,
            self.unit
        ))
    }
}

/// A grouped-means table plus its callouts.
#[derive(Debug, Clone, Copy)]
pub struct Analysis {
    pub title: &'static str,
    pub group_by: CategoricalField,
    pub fields: &'static [NumericField],
    pub callouts: &'static [CalloutSpec],
}

const SLEEP_FIELDS: &[NumericField] = &[NumericField::QualityOfSleep, NumericField::SleepDuration];
const ACTIVITY_FIELDS: &[NumericField] = &[NumericField::PhysicalActivityLevel];
const STRESS_FIELDS: &[NumericField] = &[NumericField::StressLevel];

const fn best(field: NumericField, subject: &'static str, lead: &'static str, unit: &'static str) -> CalloutSpec {
    CalloutSpec {
        field,
        extreme: Extreme::Max,
        subject,
        lead,
        unit,
    }
}

const fn least(field: NumericField, subject: &'static str) -> CalloutSpec {
    CalloutSpec {
        field,
        extreme: Extreme::Min,
        subject,
        lead: "an average level of ",
        unit: "",
    }
}

/// The analysis sections, in display order.
pub const ANALYSES: [Analysis; 6] = [
    Analysis {
        title: "Sleep Quality Analysis by Gender",
        group_by: CategoricalField::Gender,
        fields: SLEEP_FIELDS,
        callouts: &[
            best(NumericField::QualityOfSleep, "gender with better average sleep quality", "a score of ", ""),
            best(NumericField::SleepDuration, "gender with longer average sleep duration", "", " hours on average"),
        ],
    },
    Analysis {
        title: "Sleep Quality Analysis by Occupation",
        group_by: CategoricalField::Occupation,
        fields: SLEEP_FIELDS,
        callouts: &[
            best(NumericField::QualityOfSleep, "occupation with the best average sleep quality", "a score of ", ""),
            best(NumericField::SleepDuration, "occupation with the longest average sleep duration", "", " hours on average"),
        ],
    },
    Analysis {
        title: "Physical Activity Level Analysis by Gender",
        group_by: CategoricalField::Gender,
        fields: ACTIVITY_FIELDS,
        callouts: &[best(
            NumericField::PhysicalActivityLevel,
            "gender with the highest average physical activity level",
            "a level of ",
            "",
        )],
    },
    Analysis {
        title: "Physical Activity Level Analysis by Occupation",
        group_by: CategoricalField::Occupation,
        fields: ACTIVITY_FIELDS,
        callouts: &[best(
            NumericField::PhysicalActivityLevel,
            "occupation with the highest average physical activity level",
            "a level of ",
            "",
        )],
    },
    Analysis {
        title: "Stress Level Analysis by Gender",
        group_by: CategoricalField::Gender,
        fields: STRESS_FIELDS,
        callouts: &[
            best(NumericField::StressLevel, "most stressed gender", "an average level of ", ""),
            least(NumericField::StressLevel, "least stressed gender"),
        ],
    },
    Analysis {
        title: "Stress Level Analysis by Occupation",
        group_by: CategoricalField::Occupation,
        fields: STRESS_FIELDS,
        callouts: &[
            best(NumericField::StressLevel, "most stressful occupation", "an average level of ", ""),
            least(NumericField::StressLevel, "least stressful occupation"),
        ],
    },
];

#[derive(Debug, Clone)]
pub struct SectionReport {
    pub analysis: Analysis,
    pub summaries: Vec<GroupSummary>,
    pub callouts: Vec<String>,
}

/// Aggregate and rank one section.
///
/// Rows are kept only when every field of the section is present, so the
/// means in one table always come from the same people.
pub fn build_section(table: &Table, analysis: Analysis) -> SectionReport {
    let summaries = aggregate_mean(table, analysis.group_by, analysis.fields, MissingPolicy::CompleteRows);

    let callouts = if summaries.is_empty() {
        vec![NO_DATA.to_string()]
    } else {
        analysis
            .callouts
            .iter()
            .map(|c| c.render(&summaries).unwrap_or_else(|| NO_DATA.to_string()))
            .collect()
    };

    SectionReport {
        analysis,
        summaries,
        callouts,
    }
}

/// People sharing the top Quality of Sleep score.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSleepers {
    pub max: f64,
    pub records: Table,
}

/// `None` when the table has no Quality of Sleep value at all.
pub fn best_sleepers(table: &Table) -> Option<BestSleepers> {
    let max = table_max(table, NumericField::QualityOfSleep)?;
    Some(BestSleepers {
        max,
        records: select_by_max(table, NumericField::QualityOfSleep),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::person;
    use crate::data::model::Record;

    fn sleeper(id: i64, gender: &str, quality: f64, hours: f64) -> Record {
        Record {
            quality_of_sleep: Some(quality),
            sleep_duration: Some(hours),
            ..person(id, gender, "Nurse", 5.0)
        }
    }

    #[test]
    fn sleep_section_reports_both_winners() {
        let table = Table::new(vec![
            sleeper(1, "Male", 6.0, 6.0),
            sleeper(2, "Female", 8.0, 6.5),
            sleeper(3, "Male", 7.0, 8.0),
        ]);
        let report = build_section(&table, ANALYSES[0]);

        assert_eq!(report.summaries.len(), 2);
        assert_eq!(
            report.callouts,
            [
                "The gender with better average sleep quality is Female with a score of 8.00.",
                "The gender with longer average sleep duration is Male with 7.00 hours on average.",
            ]
        );
    }

    #[test]
    fn stress_section_names_most_and_least() {
        let table = Table::new(vec![
            person(1, "Male", "Doctor", 6.0),
            person(2, "Female", "Nurse", 4.0),
            person(3, "Male", "Engineer", 8.0),
        ]);
        let report = build_section(&table, ANALYSES[4]);

        assert_eq!(
            report.callouts,
            [
                "The most stressed gender is Male with an average level of 7.00.",
                "The least stressed gender is Female with an average level of 4.00.",
            ]
        );
    }

    #[test]
    fn empty_input_is_reported_not_ranked() {
        let report = build_section(&Table::default(), ANALYSES[5]);
        assert!(report.summaries.is_empty());
        assert_eq!(report.callouts, [NO_DATA]);
        assert!(best_sleepers(&Table::default()).is_none());
    }

    #[test]
    fn incomplete_rows_are_left_out_of_a_section() {
        let mut no_hours = sleeper(2, "Female", 9.0, 0.0);
        no_hours.sleep_duration = None;
        let table = Table::new(vec![sleeper(1, "Male", 6.0, 6.0), no_hours]);

        let report = build_section(&table, ANALYSES[0]);
        let keys: Vec<&str> = report.summaries.iter().map(GroupSummary::key).collect();
        assert_eq!(keys, ["Male"]);
    }

    #[test]
    fn best_sleepers_share_the_top_score() {
        let table = Table::new(vec![
            sleeper(1, "Male", 9.0, 8.0),
            sleeper(2, "Female", 7.0, 6.5),
            sleeper(3, "Female", 9.0, 8.1),
        ]);
        let best = best_sleepers(&table).unwrap();
        assert_eq!(best.max, 9.0);
        assert_eq!(best.records.len(), 2);
    }
}
