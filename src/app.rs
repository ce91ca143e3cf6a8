use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SleepLensApp {
    pub state: AppState,
}

impl SleepLensApp {
    /// Build the app and load the configured dataset. A load failure leaves
    /// the app running with the error on screen so another file can be opened.
    pub fn new(config: &DashboardConfig) -> Self {
        let mut state = AppState::new(config);
        if let Err(e) = state.load_path(&config.dataset_path) {
            log::warn!("Starting without data: {e:#}");
        }
        Self { state }
    }
}

impl eframe::App for SleepLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: view controls ----
        egui::SidePanel::left("control_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tables, callouts and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard::central_panel(ui, &self.state);
        });
    }
}
