/// Data layer: core types, loading, normalization, filtering and chart data.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable (untyped cells)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  coerce price / meters / rooms → ListingTable
///   └───────────┘
///        │            (memoized per source by `cache`)
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → FilteredView + Aggregates
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  charts   │  histogram / box stats / scatter points
///   └──────────┘
/// ```

pub mod cache;
pub mod charts;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
