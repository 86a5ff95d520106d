#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::DemandMapApp;
use dm_app::DashboardConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    // A broken config file should not keep the dashboard from starting.
    let config = DashboardConfig::load_or_default(None).unwrap_or_else(|error| {
        tracing::warn!("ignoring config file: {error}");
        DashboardConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "demandmap",
        options,
        Box::new(|cc| Ok(Box::new(DemandMapApp::new(cc, config)))),
    )
}
