use atico_dash::config::DashboardConfig;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AticoDashApp {
    pub state: AppState,
}

impl AticoDashApp {
    pub fn new(config: DashboardConfig) -> Self {
        let mut state = AppState::new(config);
        state.open_default();
        Self { state }
    }
}

impl eframe::App for AticoDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, charts, listings ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("📊 Seville Penthouses Dashboard");
            ui.separator();

            if let Some(err) = &self.state.load_error {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading(RichText::new(err).color(Color32::RED));
                });
                return;
            }
            if self.state.table.is_none() {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("Open a listings file to start  (File → Open…)");
                });
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::metrics(ui, &self.state);
                    ui.separator();
                    plot::price_histogram(ui, &self.state);
                    plot::price_by_rooms(ui, &self.state);
                    plot::meters_vs_price(ui, &self.state);
                    ui.separator();
                    table::listings_table(ui, &self.state);
                    ui.separator();
                    ui.small("Simulated data for learning purposes");
                });
        });
    }
}
