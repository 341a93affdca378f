mod app;
mod color;
mod state;
mod ui;

use app::AticoDashApp;
use atico_dash::config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::default();
    let title = config.window_title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(AticoDashApp::new(config)))),
    )
}
