use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use super::error::LoadError;
use super::model::{CellValue, Listing, ListingTable, RawTable};

/// Literal suffix carried by the `meters` column (`"90 m²"`).
pub const AREA_SUFFIX: &str = " m²";

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit-run pattern is valid"));

const PRICE: &str = "price";
const METERS: &str = "meters";
const ROOMS: &str = "rooms";

// ---------------------------------------------------------------------------
// Table normalization
// ---------------------------------------------------------------------------

/// Coerce the `price`, `meters` and `rooms` columns of every row.
///
/// The first row that cannot be coerced aborts the whole load; no partial
/// table is returned. All other columns are carried through untouched;
/// repeated header names get a `.1`, `.2`, … suffix so no column is lost.
pub fn normalize(mut raw: RawTable) -> Result<ListingTable, LoadError> {
    raw.headers = dedupe_headers(&raw.headers);

    let price_idx = raw.column_index(PRICE).ok_or(LoadError::MissingColumn(PRICE))?;
    let meters_idx = raw.column_index(METERS).ok_or(LoadError::MissingColumn(METERS))?;
    let rooms_idx = raw.column_index(ROOMS).ok_or(LoadError::MissingColumn(ROOMS))?;
    let required = [price_idx, meters_idx, rooms_idx];

    let extra_columns: Vec<String> = raw
        .headers
        .iter()
        .enumerate()
        .filter(|(i, _)| !required.contains(i))
        .map(|(_, h)| h.clone())
        .collect();

    let mut listings = Vec::with_capacity(raw.rows.len());
    for (row, cells) in raw.rows.iter().enumerate() {
        let cell = |idx: usize| cells.get(idx).unwrap_or(&CellValue::Null);

        let price = parse_price(cell(price_idx), row)?;
        let meters = parse_meters(cell(meters_idx), row)?;
        let rooms = parse_rooms(cell(rooms_idx), row)?;

        let extra: BTreeMap<String, CellValue> = raw
            .headers
            .iter()
            .zip(cells)
            .enumerate()
            .filter(|(i, _)| !required.contains(i))
            .map(|(_, (h, c))| (h.clone(), c.clone()))
            .collect();

        listings.push(Listing {
            price,
            meters,
            rooms,
            extra,
        });
    }

    Ok(ListingTable::new(listings, extra_columns))
}

/// `["district", "district"]` → `["district", "district.1"]`.
fn dedupe_headers(headers: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(headers.len());
    headers
        .iter()
        .map(|h| {
            let mut name = h.clone();
            let mut n = 0;
            while !seen.insert(name.clone()) {
                n += 1;
                name = format!("{h}.{n}");
            }
            name
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-column coercion
// ---------------------------------------------------------------------------

/// Plain numeric conversion; no currency parsing, no rounding.
pub fn parse_price(cell: &CellValue, row: usize) -> Result<f64, LoadError> {
    let price = match cell {
        CellValue::Integer(i) => Some(*i as f64),
        CellValue::Float(f) => Some(*f),
        CellValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    price
        .filter(|p| p.is_finite())
        .ok_or_else(|| LoadError::InvalidPrice {
            row,
            value: cell.clone(),
        })
}

/// Strip the `" m²"` suffix and parse the rest as a whole number.
///
/// Decimals are rejected rather than truncated.
pub fn parse_meters(cell: &CellValue, row: usize) -> Result<u32, LoadError> {
    let meters = match cell {
        CellValue::String(s) => {
            let stripped = s.replace(AREA_SUFFIX, "");
            parse_digits(stripped.trim())
        }
        other => integral_u32(other),
    };
    meters.ok_or_else(|| LoadError::InvalidMeters {
        row,
        value: cell.clone(),
    })
}

/// Take the first run of decimal digits in the text, e.g. `"3 habitaciones"` → 3.
pub fn parse_rooms(cell: &CellValue, row: usize) -> Result<u32, LoadError> {
    let rooms = match cell {
        CellValue::String(s) => DIGIT_RUN
            .find(s)
            .and_then(|m| m.as_str().parse::<u32>().ok()),
        other => integral_u32(other),
    };
    rooms.ok_or_else(|| LoadError::InvalidRooms {
        row,
        value: cell.clone(),
    })
}

/// Digits only: `u32::from_str` would also accept a leading `+`.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok()
}

/// Numeric cells that already hold a whole, non-negative magnitude.
fn integral_u32(cell: &CellValue) -> Option<u32> {
    match cell {
        CellValue::Integer(i) => u32::try_from(*i).ok(),
        CellValue::Float(f) if f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64 => {
            Some(*f as u32)
        }
        _ => None,
    }
}
