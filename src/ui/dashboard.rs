use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::color::ACCENT;
use crate::config::PREVIEW_ROWS;
use crate::data::aggregate::{aggregate_mean, MissingPolicy};
use crate::data::filter::{filter_by_category, window, CategoryFilter, WindowDirection};
use crate::data::model::{CategoricalField, NumericField, Table};
use crate::data::report::{best_sleepers, build_section, ANALYSES, NO_DATA};
use crate::data::stats::describe_all;
use crate::state::AppState;
use crate::ui::{plot, tables};

// ---------------------------------------------------------------------------
// Central panel – the scrolling report
// ---------------------------------------------------------------------------

/// Render every dashboard section, top to bottom.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                let text = state
                    .status_message
                    .clone()
                    .unwrap_or_else(|| "Open a dataset to begin  (File → Open…)".into());
                ui.heading(RichText::new(text).color(Color32::RED));
            });
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            title(ui);
            previews(ui, table);
            interactive_view(ui, state);
            best_sleepers_section(ui, &state.filtered());
            descriptive_statistics(ui, table);
            analyses(ui, table);
            charts(ui, table, state);
        });
}

fn title(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("Sleep Health and Lifestyle Dataset")
                .size(40.0)
                .strong()
                .color(ACCENT),
        );
        ui.label(RichText::new("Exploring sleep, activity and stress").italics().size(20.0));
    });
    ui.separator();
}

fn previews(ui: &mut Ui, table: &Table) {
    ui.heading(format!("First {PREVIEW_ROWS} Rows"));
    tables::record_table(ui, "head", &window(table, WindowDirection::First, PREVIEW_ROWS));
    ui.separator();

    ui.heading(format!("Last {PREVIEW_ROWS} Rows"));
    tables::record_table(ui, "tail", &window(table, WindowDirection::Last, PREVIEW_ROWS));
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        ui.heading(format!("First {PREVIEW_ROWS} Rows Where Gender is"));
        ui.heading(RichText::new("Male").color(Color32::from_rgb(0xFF, 0xA5, 0x00)));
    });
    let male = filter_by_category(table, CategoricalField::Gender, &CategoryFilter::Value("male".into()));
    tables::record_table(ui, "male_head", &window(&male, WindowDirection::First, PREVIEW_ROWS));
    ui.separator();
}

fn interactive_view(ui: &mut Ui, state: &AppState) {
    ui.heading(state.view_heading());
    tables::record_table(ui, "interactive_view", &state.view());
    ui.separator();
}

fn best_sleepers_section(ui: &mut Ui, filtered: &Table) {
    ui.heading("People Who Sleep Better (Highest Quality of Sleep)");
    match best_sleepers(filtered) {
        Some(best) => {
            ui.label(format!("Highest Quality of Sleep: {}", best.max));
            tables::sleeper_table(ui, "best_sleepers", &best.records);
        }
        None => {
            ui.label(NO_DATA);
        }
    }
    ui.separator();
}

fn descriptive_statistics(ui: &mut Ui, table: &Table) {
    ui.heading("Descriptive Statistics");
    tables::stats_table(ui, "describe", &describe_all(table));
    ui.separator();
}

fn analyses(ui: &mut Ui, table: &Table) {
    for (i, analysis) in ANALYSES.into_iter().enumerate() {
        let report = build_section(table, analysis);
        ui.heading(report.analysis.title);
        tables::summary_table(
            ui,
            &format!("analysis_{i}"),
            report.analysis.group_by,
            report.analysis.fields,
            &report.summaries,
        );
        for line in &report.callouts {
            ui.label(line);
        }
        ui.separator();
    }
}

fn charts(ui: &mut Ui, table: &Table, state: &AppState) {
    let stress = [NumericField::StressLevel];

    ui.heading("Stress Level by Gender (Bar Chart)");
    let by_gender = aggregate_mean(table, CategoricalField::Gender, &stress, MissingPolicy::PerField);
    plot::bar_chart(ui, "stress_by_gender", &by_gender, NumericField::StressLevel);
    ui.separator();

    ui.heading("Stress Level by Occupation (Bar Chart)");
    let by_occupation = aggregate_mean(table, CategoricalField::Occupation, &stress, MissingPolicy::PerField);
    plot::barh_chart(ui, "stress_by_occupation", &by_occupation, NumericField::StressLevel);
    ui.separator();

    if let Some(color_map) = &state.color_map {
        ui.heading("Sleep Duration vs Quality of Sleep");
        plot::scatter_plot(
            ui,
            "duration_vs_quality",
            table,
            NumericField::SleepDuration,
            NumericField::QualityOfSleep,
            color_map,
        );
        ui.separator();
    }
}
