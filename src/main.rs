mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::SleepLensApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();
    log::info!("Dataset: {}", config.dataset_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sleep Lens – Sleep Health and Lifestyle",
        options,
        Box::new(move |_cc| Ok(Box::new(SleepLensApp::new(&config)))),
    )
}
