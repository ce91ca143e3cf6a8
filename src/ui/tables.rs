use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::GroupSummary;
use crate::data::model::{CategoricalField, NumericField, Record, Table};
use crate::data::stats::FieldStats;

const ROW_HEIGHT: f32 = 18.0;
const MAX_TABLE_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Generic grid
// ---------------------------------------------------------------------------

/// Draw a striped, scrollable grid of pre-formatted cells.
fn grid(ui: &mut Ui, id: &str, headers: &[&str], rows: &[Vec<String>]) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(true)
            .max_scroll_height(MAX_TABLE_HEIGHT)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0), headers.len())
            .header(ROW_HEIGHT + 4.0, |mut header| {
                for h in headers {
                    header.col(|ui: &mut Ui| {
                        ui.strong(*h);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let cells = &rows[row.index()];
                    for cell in cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}

fn opt_text(value: Option<&str>) -> String {
    value.unwrap_or("").to_string()
}

/// Numbers print the way they appear in the source file: `7` not `7.0`.
fn opt_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Record tables
// ---------------------------------------------------------------------------

const RECORD_HEADERS: [&str; 13] = [
    "Person ID",
    "Gender",
    "Age",
    "Occupation",
    "Sleep Duration",
    "Quality of Sleep",
    "Physical Activity Level",
    "Stress Level",
    "BMI Category",
    "Blood Pressure",
    "Heart Rate",
    "Daily Steps",
    "Sleep Disorder",
];

fn record_cells(r: &Record) -> Vec<String> {
    vec![
        r.person_id.to_string(),
        opt_text(r.gender.as_deref()),
        opt_number(r.age),
        opt_text(r.occupation.as_deref()),
        opt_number(r.sleep_duration),
        opt_number(r.quality_of_sleep),
        opt_number(r.physical_activity_level),
        opt_number(r.stress_level),
        opt_text(r.bmi_category.as_deref()),
        opt_text(r.blood_pressure.as_deref()),
        opt_number(r.heart_rate),
        opt_number(r.daily_steps),
        opt_text(r.sleep_disorder.as_deref()),
    ]
}

/// Every column of every record.
pub fn record_table(ui: &mut Ui, id: &str, table: &Table) {
    let rows: Vec<Vec<String>> = table.iter().map(record_cells).collect();
    grid(ui, id, &RECORD_HEADERS, &rows);
}

/// The columns shown for the best sleepers.
pub fn sleeper_table(ui: &mut Ui, id: &str, table: &Table) {
    let headers = [
        "Person ID",
        "Gender",
        "Age",
        "Occupation",
        "Sleep Duration",
        "Quality of Sleep",
    ];
    let rows: Vec<Vec<String>> = table
        .iter()
        .map(|r| {
            vec![
                r.person_id.to_string(),
                opt_text(r.gender.as_deref()),
                opt_number(r.age),
                opt_text(r.occupation.as_deref()),
                opt_number(r.sleep_duration),
                opt_number(r.quality_of_sleep),
            ]
        })
        .collect();
    grid(ui, id, &headers, &rows);
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Group key, its record count and the 2-decimal mean of each field.
pub fn summary_table(
    ui: &mut Ui,
    id: &str,
    group_by: CategoricalField,
    fields: &[NumericField],
    summaries: &[GroupSummary],
) {
    let headers: Vec<&str> = [group_by.column(), "Records"]
        .into_iter()
        .chain(fields.iter().map(|f| f.column()))
        .collect();
    let rows: Vec<Vec<String>> = summaries.iter().map(|s| summary_cells(s, fields)).collect();
    grid(ui, id, &headers, &rows);
}

fn summary_cells(summary: &GroupSummary, fields: &[NumericField]) -> Vec<String> {
    [summary.key().to_string(), summary.count().to_string()]
        .into_iter()
        .chain(fields.iter().map(|&f| match summary.rounded_mean(f) {
            Some(v) => format!("{v:.2}"),
            None => "NaN".to_string(),
        }))
        .collect()
}

/// One row per numeric column.
pub fn stats_table(ui: &mut Ui, id: &str, stats: &[(NumericField, FieldStats)]) {
    let headers = ["Column", "Count", "Mean", "Std", "Min", "Median", "Max"];
    let rows: Vec<Vec<String>> = stats
        .iter()
        .map(|(field, s)| {
            vec![
                field.column().to_string(),
                s.count.to_string(),
                format!("{:.2}", s.mean),
                s.std_dev.map(|v| format!("{v:.2}")).unwrap_or_else(|| "NaN".into()),
                format!("{:.2}", s.min),
                format!("{:.2}", s.median),
                format!("{:.2}", s.max),
            ]
        })
        .collect();
    grid(ui, id, &headers, &rows);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::{aggregate_mean, MissingPolicy};

    #[test]
    fn record_cells_line_up_with_headers() {
        let r = Record {
            person_id: 7,
            gender: Some("Female".into()),
            sleep_duration: Some(7.5),
            stress_level: Some(4.0),
            ..Record::default()
        };
        let cells = record_cells(&r);

        assert_eq!(cells.len(), RECORD_HEADERS.len());
        assert_eq!(cells[0], "7");
        assert_eq!(cells[1], "Female");
        assert_eq!(cells[2], "");
        assert_eq!(cells[4], "7.5");
        assert_eq!(cells[7], "4");
    }

    #[test]
    fn summary_cells_show_count_and_rounded_means() {
        let table = Table::new(vec![
            Record {
                gender: Some("Male".into()),
                stress_level: Some(6.0),
                ..Record::default()
            },
            Record {
                gender: Some("Male".into()),
                stress_level: Some(7.0),
                ..Record::default()
            },
            Record {
                gender: Some("Male".into()),
                ..Record::default()
            },
        ]);
        let fields = [NumericField::StressLevel, NumericField::Age];
        let summaries = aggregate_mean(&table, CategoricalField::Gender, &fields, MissingPolicy::PerField);

        assert_eq!(summary_cells(&summaries[0], &fields), ["Male", "3", "6.50", "NaN"]);
    }
}
