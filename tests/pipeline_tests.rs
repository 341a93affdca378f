use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

use atico_dash::data::error::EmptyResultWarning;
use atico_dash::data::filter::{apply, Aggregates, FilterCriteria};
use atico_dash::data::model::{Listing, ListingTable};

fn sample_table() -> ListingTable {
    ListingTable::from_listings(vec![
        Listing::new(300_000.0, 90, 2),
        Listing::new(500_000.0, 120, 3),
        Listing::new(185_000.0, 55, 1),
        Listing::new(420_000.0, 100, 3),
        Listing::new(260_000.0, 75, 2),
        Listing::new(720_000.0, 160, 4),
    ])
}

#[test]
fn test_example_from_two_rows() {
    let table = ListingTable::from_listings(vec![
        Listing::new(300_000.0, 90, 2),
        Listing::new(500_000.0, 120, 3),
    ]);
    let criteria = FilterCriteria::new(400_000.0, [2, 3]);

    let (view, agg) = apply(&table, &criteria);

    assert_eq!(view.indices(), &[0]);
    assert_eq!(view.rows(&table).next(), Some(&table.listings[0]));
    assert_eq!(
        agg,
        Aggregates {
            mean_price: Some(300_000.0),
            mean_meters: Some(90.0),
            count: 1,
        }
    );
}

#[test]
fn test_apply_is_idempotent() {
    let table = sample_table();
    let criteria = FilterCriteria::new(450_000.0, [2, 3]);

    let first = apply(&table, &criteria);
    let second = apply(&table, &criteria);

    assert_eq!(first, second);
    assert_eq!(first.0.indices(), &[0, 3, 4]);
}

#[test]
fn test_raising_price_never_shrinks_view() {
    let table = sample_table();
    let rooms: BTreeSet<u32> = table.distinct_rooms();

    let mut previous = 0;
    for max_price in (0..=800_000).step_by(20_000) {
        let (view, agg) = apply(&table, &FilterCriteria::new(max_price as f64, rooms.clone()));
        assert!(view.len() >= previous, "shrank at {max_price}");
        assert_eq!(agg.count, view.len());
        previous = view.len();
    }
    assert_eq!(previous, table.len());
}

#[test]
fn test_shrinking_rooms_never_grows_view() {
    let table = sample_table();
    let mut rooms: Vec<u32> = table.distinct_rooms().into_iter().collect();

    let mut previous = usize::MAX;
    while !rooms.is_empty() {
        let (view, _) = apply(&table, &FilterCriteria::new(1_000_000.0, rooms.clone()));
        assert!(view.len() <= previous);
        previous = view.len();
        rooms.pop();
    }
}

#[test]
fn test_view_preserves_table_order() {
    let table = sample_table();
    let (view, _) = apply(&table, &FilterCriteria::all(&table));

    assert_eq!(view.indices(), &[0, 1, 2, 3, 4, 5]);
    let prices: Vec<f64> = view.rows(&table).map(|l| l.price).collect();
    let expected: Vec<f64> = table.iter().map(|l| l.price).collect();
    assert_eq!(prices, expected);
}

#[test]
fn test_impossible_criteria_give_no_data_sentinel() {
    let table = sample_table();
    let criteria = FilterCriteria::new(-1.0, []);

    let (view, agg) = apply(&table, &criteria);

    assert!(view.is_empty());
    assert_eq!(agg.count, 0);
    assert_eq!(agg.mean_price, None);
    assert_eq!(agg.mean_meters, None);
    assert_eq!(agg.warning(), Some(EmptyResultWarning));
    assert_eq!(
        agg.warning().map(|w| w.to_string()).as_deref(),
        Some("No listings match the current filters")
    );
}

#[test]
fn test_means_over_several_rows() {
    let table = sample_table();
    let (view, agg) = apply(&table, &FilterCriteria::new(1_000_000.0, [3]));

    assert_eq!(view.indices(), &[1, 3]);
    assert_eq!(agg.mean_price, Some(460_000.0));
    assert_eq!(agg.mean_meters, Some(110.0));
    assert_eq!(agg.count, 2);
}
