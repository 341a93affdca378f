use atico_dash::data::model::CellValue;
use atico_dash::format::format_price;
use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Filtered listings, including every pass-through column.
pub fn listings_table(ui: &mut Ui, state: &AppState) {
    ui.strong("Listings");
    let Some(table) = state.table.as_deref() else {
        return;
    };
    let indices = state.view.indices();
    if indices.is_empty() {
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto())
        .columns(Column::auto().at_least(70.0), 3)
        .columns(Column::auto().at_least(80.0), table.extra_columns.len())
        .min_scrolled_height(0.0)
        .max_scroll_height(320.0)
        .header(20.0, |mut header| {
            for title in ["#", "Price", "Meters", "Rooms"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
            for col in &table.extra_columns {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, indices.len(), |mut row| {
                let idx = indices[row.index()];
                let Some(listing) = table.get(idx) else {
                    return;
                };
                row.col(|ui| {
                    ui.label(idx.to_string());
                });
                row.col(|ui| {
                    ui.label(format_price(Some(listing.price)));
                });
                row.col(|ui| {
                    ui.label(format!("{} m²", listing.meters));
                });
                row.col(|ui| {
                    ui.label(listing.rooms.to_string());
                });
                for col in &table.extra_columns {
                    row.col(|ui| {
                        let text = listing
                            .extra
                            .get(col)
                            .filter(|v| **v != CellValue::Null)
                            .map(|v| v.to_string())
                            .unwrap_or_default();
                        ui.label(text);
                    });
                }
            });
        });
}
