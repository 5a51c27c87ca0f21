#![windows_subsystem = "windows"]

mod app;
mod config;
mod error;
mod inspection;
mod metrics;
mod models;
mod overlay;
mod report;
mod ui;
mod utils;

use eframe::egui;

use crate::app::InspectApp;
use crate::config::AppConfig;

fn main() {
    let config_path = AppConfig::default_path();
    let (config, config_error) = AppConfig::load_or_default(&config_path);

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();
    if let Some(e) = config_error {
        log::warn!("Ignoring config {}: {}", config_path.display(), e);
    }
    log::info!("Starting {}", ui::TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(ui::TITLE),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        ui::TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(InspectApp::new(config)))),
    ) {
        log::error!("Error running native application: {}", e);
    }
}
