use std::collections::BTreeSet;

use super::error::EmptyResultWarning;
use super::model::{Listing, ListingTable};

// ---------------------------------------------------------------------------
// Filter criteria: price ceiling + allowed room counts
// ---------------------------------------------------------------------------

/// The user's current constraints. Rebuilt from the widgets on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Inclusive upper bound on price.
    pub max_price: f64,
    /// Room counts to keep. Empty means nothing passes.
    pub allowed_rooms: BTreeSet<u32>,
}

impl FilterCriteria {
    pub fn new(max_price: f64, allowed_rooms: impl IntoIterator<Item = u32>) -> Self {
        FilterCriteria {
            max_price,
            allowed_rooms: allowed_rooms.into_iter().collect(),
        }
    }

    /// Criteria that keep every listing: the widgets' initial state.
    pub fn all(table: &ListingTable) -> Self {
        let max_price = table.price_range().map(|(_, hi)| hi).unwrap_or(0.0);
        FilterCriteria {
            max_price,
            allowed_rooms: table.distinct_rooms(),
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        listing.price <= self.max_price && self.allowed_rooms.contains(&listing.rooms)
    }
}

// ---------------------------------------------------------------------------
// Filtered view + aggregates
// ---------------------------------------------------------------------------

/// Indices of the listings that pass the criteria, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve the view against the table it was computed from.
    pub fn rows<'a>(&'a self, table: &'a ListingTable) -> impl Iterator<Item = &'a Listing> + 'a {
        self.indices.iter().filter_map(move |&i| table.get(i))
    }
}

/// Summary figures for the metric cards.
///
/// Means are `None` when the view is empty, never NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregates {
    pub mean_price: Option<f64>,
    pub mean_meters: Option<f64>,
    pub count: usize,
}

impl Aggregates {
    fn from_rows<'a>(rows: impl Iterator<Item = &'a Listing>) -> Self {
        let (count, price_sum, meters_sum) = rows.fold((0usize, 0.0f64, 0.0f64), |acc, l| {
            (acc.0 + 1, acc.1 + l.price, acc.2 + f64::from(l.meters))
        });
        if count == 0 {
            return Aggregates::default();
        }
        let n = count as f64;
        Aggregates {
            mean_price: Some(price_sum / n),
            mean_meters: Some(meters_sum / n),
            count,
        }
    }

    pub fn warning(&self) -> Option<EmptyResultWarning> {
        (self.count == 0).then_some(EmptyResultWarning)
    }
}

/// Filter the table and summarise the result.
///
/// A listing passes when `price <= max_price` and its room count is in
/// `allowed_rooms`. Pure: the same inputs always give the same output.
pub fn apply(table: &ListingTable, criteria: &FilterCriteria) -> (FilteredView, Aggregates) {
    let indices: Vec<usize> = table
        .iter()
        .enumerate()
        .filter(|(_, l)| criteria.matches(l))
        .map(|(i, _)| i)
        .collect();
    let view = FilteredView { indices };
    let aggregates = Aggregates::from_rows(view.rows(table));
    (view, aggregates)
}
