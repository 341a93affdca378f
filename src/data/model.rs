use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single raw cell from the source sheet
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring what spreadsheets and Pandas hand back.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// ISO-8601 date string kept as text for simplicity.
    Date(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.0}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// RawTable – the untyped sheet as read from disk
// ---------------------------------------------------------------------------

/// Header row plus data rows, before any column is coerced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        RawTable { headers, rows }
    }

    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

// ---------------------------------------------------------------------------
// Listing – one normalized row
// ---------------------------------------------------------------------------

/// A single real-estate unit after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Asking price in currency units.
    pub price: f64,
    /// Floor area in square meters.
    pub meters: u32,
    pub rooms: u32,
    /// Every other source column, untouched: column_name → value.
    pub extra: BTreeMap<String, CellValue>,
}

impl Listing {
    pub fn new(price: f64, meters: u32, rooms: u32) -> Self {
        Listing {
            price,
            meters,
            rooms,
            extra: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// ListingTable – the complete normalized dataset
// ---------------------------------------------------------------------------

/// All listings in source row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingTable {
    pub listings: Vec<Listing>,
    /// Pass-through column names, in source order.
    pub extra_columns: Vec<String>,
}

impl ListingTable {
    pub fn new(listings: Vec<Listing>, extra_columns: Vec<String>) -> Self {
        ListingTable {
            listings,
            extra_columns,
        }
    }

    /// Build a table without pass-through columns.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        ListingTable::new(listings, Vec::new())
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Listing> {
        self.listings.get(index)
    }

    /// `(min, max)` price across all listings, used for the slider bounds.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.listings.iter().map(|l| l.price).fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
    }

    /// Sorted unique room counts, used for the multiselect options.
    pub fn distinct_rooms(&self) -> BTreeSet<u32> {
        self.listings.iter().map(|l| l.rooms).collect()
    }
}

impl<'a> IntoIterator for &'a ListingTable {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.listings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ListingTable {
        ListingTable::from_listings(vec![
            Listing::new(300_000.0, 90, 2),
            Listing::new(150_000.0, 55, 1),
            Listing::new(500_000.0, 120, 3),
            Listing::new(280_000.0, 85, 2),
        ])
    }

    #[test]
    fn price_range_spans_all_rows() {
        assert_eq!(table().price_range(), Some((150_000.0, 500_000.0)));
        assert_eq!(ListingTable::default().price_range(), None);
    }

    #[test]
    fn distinct_rooms_sorted_unique() {
        let rooms: Vec<u32> = table().distinct_rooms().into_iter().collect();
        assert_eq!(rooms, vec![1, 2, 3]);
    }

    #[test]
    fn cell_display() {
        assert_eq!(CellValue::Float(90.0).to_string(), "90");
        assert_eq!(CellValue::Float(1.5).to_string(), "1.5000");
        assert_eq!(CellValue::String("Triana".into()).to_string(), "Triana");
        assert_eq!(CellValue::Null.to_string(), "<null>");
    }

    #[test]
    fn raw_column_lookup() {
        let raw = RawTable::new(vec!["price".into(), "rooms".into()], Vec::new());
        assert_eq!(raw.column_index("rooms"), Some(1));
        assert_eq!(raw.column_index("meters"), None);
    }
}
