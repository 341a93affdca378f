use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use atico_dash::config::DashboardConfig;
use atico_dash::data::cache::DatasetCache;
use atico_dash::data::filter::{apply, Aggregates, FilterCriteria, FilteredView};
use atico_dash::data::model::ListingTable;

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Tables already read this session, keyed by source.
    cache: DatasetCache,

    /// Source of the current table.
    pub source: Option<PathBuf>,

    /// Loaded listings (None until a source loads cleanly).
    pub table: Option<Arc<ListingTable>>,

    /// Fatal load failure; while set nothing but the message is rendered.
    pub load_error: Option<String>,

    /// Price slider position.
    pub max_price: f64,

    /// Checked room counts.
    pub selected_rooms: BTreeSet<u32>,

    /// Listings passing the current filters (cached).
    pub view: FilteredView,

    pub aggregates: Aggregates,

    /// Colour per room count, shared by the box plot and scatter.
    pub room_colors: Option<ColorMap>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            cache: DatasetCache::new(),
            source: None,
            table: None,
            load_error: None,
            max_price: 0.0,
            selected_rooms: BTreeSet::new(),
            view: FilteredView::default(),
            aggregates: Aggregates::default(),
            room_colors: None,
        }
    }

    /// Load the configured startup source if it exists.
    pub fn open_default(&mut self) {
        let path = self.config.data_path.clone();
        if path.exists() {
            self.open(&path);
        } else {
            log::info!("No data file at {}; waiting for File → Open", path.display());
        }
    }

    /// Load (or fetch from cache) a source and make it current.
    pub fn open(&mut self, path: &Path) {
        self.source = Some(path.to_path_buf());
        match self.cache.get_or_load(path) {
            Ok(table) => self.set_table(table),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.table = None;
                self.view = FilteredView::default();
                self.aggregates = Aggregates::default();
                self.room_colors = None;
                self.load_error = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a table and reset every widget to "show everything".
    pub fn set_table(&mut self, table: Arc<ListingTable>) {
        let criteria = FilterCriteria::all(&table);
        self.max_price = criteria.max_price;
        self.selected_rooms = criteria.allowed_rooms;
        self.room_colors = Some(ColorMap::new(&table.distinct_rooms()));
        self.table = Some(table);
        self.load_error = None;
        self.refilter();
    }

    /// Current widget state as filter criteria.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            max_price: self.max_price,
            allowed_rooms: self.selected_rooms.clone(),
        }
    }

    /// Recompute the view and aggregates after a widget change.
    pub fn refilter(&mut self) {
        let Some(table) = &self.table else {
            return;
        };
        let (view, aggregates) = apply(table, &self.criteria());
        if let Some(warning) = aggregates.warning() {
            if !self.view.is_empty() {
                log::warn!("{warning}");
            }
        }
        self.view = view;
        self.aggregates = aggregates;
    }

    /// Slider bounds: whole currency units around the table's price range.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let (lo, hi) = self.table.as_ref()?.price_range()?;
        Some((lo.floor(), hi.ceil()))
    }

    pub fn set_max_price(&mut self, max_price: f64) {
        self.max_price = max_price;
        self.refilter();
    }

    /// Toggle a single room count in the multiselect.
    pub fn toggle_room(&mut self, rooms: u32) {
        if !self.selected_rooms.remove(&rooms) {
            self.selected_rooms.insert(rooms);
        }
        self.refilter();
    }

    /// Check every room count.
    pub fn select_all_rooms(&mut self) {
        if let Some(table) = &self.table {
            self.selected_rooms = table.distinct_rooms();
            self.refilter();
        }
    }

    /// Uncheck every room count.
    pub fn select_no_rooms(&mut self) {
        self.selected_rooms.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atico_dash::data::model::Listing;

    fn state() -> AppState {
        let mut state = AppState::new(DashboardConfig::default());
        state.set_table(Arc::new(ListingTable::from_listings(vec![
            Listing::new(300_000.4, 90, 2),
            Listing::new(500_000.0, 120, 3),
            Listing::new(180_000.0, 60, 1),
        ])));
        state
    }

    #[test]
    fn new_table_selects_everything() {
        let state = state();
        assert_eq!(state.aggregates.count, 3);
        assert_eq!(state.max_price, 500_000.0);
        assert_eq!(state.selected_rooms.len(), 3);
        assert_eq!(state.price_bounds(), Some((180_000.0, 500_000.0)));
    }

    #[test]
    fn widget_changes_refilter() {
        let mut state = state();
        state.set_max_price(400_000.0);
        assert_eq!(state.view.indices(), &[0, 2]);

        state.toggle_room(1);
        assert_eq!(state.view.indices(), &[0]);
        assert_eq!(state.aggregates.mean_meters, Some(90.0));

        state.select_no_rooms();
        assert!(state.view.is_empty());
        assert!(state.aggregates.mean_price.is_none());

        state.select_all_rooms();
        assert_eq!(state.view.len(), 2);
    }

    #[test]
    fn failed_open_clears_the_dashboard() {
        let mut state = state();
        state.open(Path::new("does/not/exist.xlsx"));
        assert!(state.table.is_none());
        assert!(state.load_error.is_some());
        assert!(state.view.is_empty());
    }
}
