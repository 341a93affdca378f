use atico_dash::data::loader::SUPPORTED_EXTENSIONS;
use atico_dash::format::{format_count, format_meters, format_price};
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(table) = state.table.clone() else {
        ui.label("No listings loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Price ceiling ----
            ui.strong("Maximum price");
            if let Some((lo, hi)) = state.price_bounds() {
                let mut max_price = state.max_price;
                let slider = egui::Slider::new(&mut max_price, lo..=hi)
                    .integer()
                    .suffix(" €");
                if ui.add(slider).changed() {
                    state.set_max_price(max_price);
                }
            }
            ui.separator();

            // ---- Room multiselect ----
            let all_rooms = table.distinct_rooms();
            let header_text = format!(
                "Number of rooms  ({}/{})",
                state.selected_rooms.len(),
                all_rooms.len()
            );
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("rooms_filter")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_rooms();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_rooms();
                        }
                    });

                    for rooms in all_rooms {
                        let mut text = RichText::new(rooms.to_string());
                        if let Some(cm) = &state.room_colors {
                            text = text.color(cm.color_for(rooms));
                        }
                        let mut checked = state.selected_rooms.contains(&rooms);
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_room(rooms);
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

/// Average price, average floor area and count for the current view.
pub fn metrics(ui: &mut Ui, state: &AppState) {
    let agg = &state.aggregates;
    let cards = [
        ("Average price", format_price(agg.mean_price)),
        ("Average square meters", format_meters(agg.mean_meters)),
        ("Number of properties", format_count(agg.count)),
    ];

    ui.columns(cards.len(), |cols| {
        for (col, (label, value)) in cols.iter_mut().zip(cards) {
            col.label(RichText::new(label).weak());
            col.heading(RichText::new(value).strong());
        }
    });

    if let Some(warning) = agg.warning() {
        ui.label(RichText::new(warning.to_string()).italics().weak());
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

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} listings loaded, {} visible",
                table.len(),
                state.view.len()
            ));
        }

        if let Some(source) = &state.source {
            ui.separator();
            ui.label(RichText::new(source.display().to_string()).weak());
        }

        if let Some(msg) = &state.load_error {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open listings")
        .add_filter("Supported files", SUPPORTED_EXTENSIONS)
        .add_filter("Spreadsheets", &["xlsx", "xlsm", "xlsb", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
