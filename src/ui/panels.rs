use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::ACCENT;
use crate::config::ROW_COUNT_RANGE;
use crate::data::filter::WindowDirection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – view controls
// ---------------------------------------------------------------------------

/// Render the gender selector, first/last choice and row-count slider.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(RichText::new("Controls").color(ACCENT));
    ui.separator();

    if state.table.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ui.strong("Select Gender");
    let current = state.gender_filter.label().to_string();
    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_salt("gender_filter")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for option in &state.gender_options {
                if ui.selectable_label(current == *option, option).clicked() {
                    picked = Some(option.clone());
                }
            }
        });
    if let Some(label) = picked {
        log::debug!("Gender filter → {label}");
        state.select_gender(&label);
    }
    ui.add_space(8.0);

    ui.strong("Show first or last rows?");
    for direction in WindowDirection::ALL {
        ui.radio_value(&mut state.direction, direction, direction.label());
    }
    ui.add_space(8.0);

    ui.strong("Number of rows to show");
    let mut n = state.row_count;
    if ui.add(egui::Slider::new(&mut n, ROW_COUNT_RANGE)).changed() {
        state.set_row_count(n);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(table), Some(source)) = (&state.table, &state.source) {
            ui.label(format!(
                "{}: {} records loaded, {} match the filter",
                source.display(),
                table.len(),
                state.filtered().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open survey data")
        .add_filter("Supported files", &["csv", "tsv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv", "tsv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        // Failures are already reported through the status bar.
        let _ = state.load_path(&path);
    }
}
