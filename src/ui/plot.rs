use atico_dash::data::charts::{box_stats_by_rooms, histogram, kde_curve, scatter_points};
use atico_dash::data::error::EmptyResultWarning;
use atico_dash::data::model::ListingTable;
use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Line, Plot, PlotPoints, Points};

use crate::state::AppState;

const PLOT_HEIGHT: f32 = 280.0;

/// The current table, or a neutral note when the view is empty.
fn drawable<'a>(ui: &mut Ui, state: &'a AppState) -> Option<&'a ListingTable> {
    let table = state.table.as_deref()?;
    if state.view.is_empty() {
        ui.label(RichText::new(EmptyResultWarning.to_string()).italics().weak());
        return None;
    }
    Some(table)
}

// ---------------------------------------------------------------------------
// Price distribution
// ---------------------------------------------------------------------------

/// Histogram of filtered prices with a density curve on top.
pub fn price_histogram(ui: &mut Ui, state: &AppState) {
    ui.strong("Price distribution");
    let Some(table) = drawable(ui, state) else {
        return;
    };

    let prices: Vec<f64> = state.view.rows(table).map(|l| l.price).collect();
    let bins = histogram(&prices, state.config.histogram_bins);
    let bin_width = bins.first().map(|b| b.width()).unwrap_or(1.0);
    let kde = kde_curve(&prices, state.config.kde_points, bin_width);

    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| Bar::new(b.center(), b.count as f64).width(b.width()))
        .collect();

    Plot::new("price_histogram")
        .height(PLOT_HEIGHT)
        .x_axis_label("Price (€)")
        .y_axis_label("Count")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(Color32::from_rgb(76, 114, 176))
                    .name("listings"),
            );
            if !kde.is_empty() {
                let curve: PlotPoints = kde.into_iter().collect();
                plot_ui.line(
                    Line::new(curve)
                        .name("density")
                        .color(Color32::from_rgb(221, 132, 82))
                        .width(2.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Price by rooms
// ---------------------------------------------------------------------------

/// One box per room count.
pub fn price_by_rooms(ui: &mut Ui, state: &AppState) {
    ui.strong("Price by rooms");
    let Some(table) = drawable(ui, state) else {
        return;
    };

    let stats = box_stats_by_rooms(state.view.rows(table));
    let color = |rooms: u32| {
        state
            .room_colors
            .as_ref()
            .map(|cm| cm.color_for(rooms))
            .unwrap_or(Color32::LIGHT_BLUE)
    };

    Plot::new("price_by_rooms")
        .height(PLOT_HEIGHT)
        .x_axis_label("Rooms")
        .y_axis_label("Price (€)")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for b in &stats {
                let x = f64::from(b.rooms);
                let c = color(b.rooms);
                let elem = BoxElem::new(
                    x,
                    BoxSpread::new(b.lower_whisker, b.q1, b.median, b.q3, b.upper_whisker),
                )
                .name(format!("{} rooms", b.rooms))
                .box_width(0.6)
                .whisker_width(0.3)
                .fill(c.gamma_multiply(0.4))
                .stroke(Stroke::new(1.5, c));
                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(format!("{} rooms", b.rooms)));

                if !b.outliers.is_empty() {
                    let points: PlotPoints = b.outliers.iter().map(|&p| [x, p]).collect();
                    plot_ui.points(Points::new(points).radius(2.5).color(c));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Meters vs price
// ---------------------------------------------------------------------------

/// Scatter of floor area against price, coloured by room count.
pub fn meters_vs_price(ui: &mut Ui, state: &AppState) {
    ui.strong("Price vs square meters");
    let Some(table) = drawable(ui, state) else {
        return;
    };

    let points = scatter_points(state.view.rows(table));
    let mut rooms: Vec<u32> = points.iter().map(|p| p.rooms).collect();
    rooms.sort_unstable();
    rooms.dedup();

    Plot::new("meters_vs_price")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Square meters")
        .y_axis_label("Price (€)")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for r in rooms {
                let series: PlotPoints = points
                    .iter()
                    .filter(|p| p.rooms == r)
                    .map(|p| [p.meters, p.price])
                    .collect();
                let color = state
                    .room_colors
                    .as_ref()
                    .map(|cm| cm.color_for(r))
                    .unwrap_or(Color32::LIGHT_BLUE);
                plot_ui.points(
                    Points::new(series)
                        .radius(3.0)
                        .color(color)
                        .name(format!("{r} rooms")),
                );
            }
        });
}
