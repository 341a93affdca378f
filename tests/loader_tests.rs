use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use atico_dash::data::error::LoadError;
use atico_dash::data::loader::{load, read_raw};
use atico_dash::data::model::CellValue;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn test_load_csv_normalizes_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "listings.csv",
        "price,meters,rooms,district\n\
         300000,90 m²,2 habitaciones,Triana\n\
         500000,120 m²,3 habitaciones,Nervión\n\
         145000.5,48 m²,1 habitación,\n",
    );

    let table = load(&path).expect("load csv");

    assert_eq!(table.len(), 3);
    assert_eq!(table.extra_columns, vec!["district".to_string()]);
    let summary: Vec<(f64, u32, u32)> = table.iter().map(|l| (l.price, l.meters, l.rooms)).collect();
    assert_eq!(
        summary,
        vec![(300000.0, 90, 2), (500000.0, 120, 3), (145000.5, 48, 1)]
    );
    assert_eq!(table.listings[1].extra["district"], CellValue::String("Nervión".into()));
    assert_eq!(table.listings[2].extra["district"], CellValue::Null);
}

#[test]
fn test_load_json_records() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "listings.json",
        r#"[
            {"price": 310000, "meters": "92 m²", "rooms": "3 habitaciones", "terrace": true},
            {"price": "275000", "meters": "80 m²", "rooms": "2 habitaciones"}
        ]"#,
    );

    let table = load(&path).expect("load json");

    assert_eq!(table.len(), 2);
    assert_eq!(table.listings[0].rooms, 3);
    assert_eq!(table.listings[1].price, 275000.0);
    assert_eq!(table.listings[0].extra["terrace"], CellValue::Bool(true));
    assert_eq!(table.listings[1].extra["terrace"], CellValue::Null);
}

#[test]
fn test_load_parquet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("listings.parquet");

    let schema = Arc::new(Schema::new(vec![
        Field::new("price", DataType::Float64, false),
        Field::new("meters", DataType::Utf8, false),
        Field::new("rooms", DataType::Utf8, false),
        Field::new("floor", DataType::Int64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Float64Array::from(vec![300000.0, 500000.0])),
            Arc::new(StringArray::from(vec!["90 m²", "120 m²"])),
            Arc::new(StringArray::from(vec!["2 habitaciones", "3 habitaciones"])),
            Arc::new(Int64Array::from(vec![5, 7])),
        ],
    )
    .unwrap();
    let file = fs::File::create(&path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    let table = load(&path).expect("load parquet");

    assert_eq!(table.len(), 2);
    assert_eq!(table.listings[1].meters, 120);
    assert_eq!(table.listings[1].extra["floor"], CellValue::Integer(7));
}

#[test]
fn test_rooms_without_digits_is_load_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "bad_rooms.csv",
        "price,meters,rooms\n300000,90 m²,2 habitaciones\n210000,40 m²,estudio\n",
    );

    let err = load(&path).unwrap_err();
    match err {
        LoadError::InvalidRooms { row, value } => {
            assert_eq!(row, 1);
            assert_eq!(value, CellValue::String("estudio".into()));
        }
        other => panic!("expected InvalidRooms, got {other:?}"),
    }
}

#[test]
fn test_decimal_meters_is_load_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad_meters.csv", "price,meters,rooms\n300000,90.5 m²,2\n");

    assert!(matches!(load(&path), Err(LoadError::InvalidMeters { row: 0, .. })));
}

#[test]
fn test_csv_numeric_looking_text_follows_column_rules() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "numeric_text.csv",
        "price,meters,rooms,floor
         300000,90,3.5,2
         310000,95,1e3,3
         320000,100,-2,4
",
    );

    let table = load(&path).expect("load csv");

    let rooms: Vec<u32> = table.iter().map(|l| l.rooms).collect();
    assert_eq!(rooms, vec![3, 1, 2]);
    assert_eq!(table.listings[0].meters, 90);
    assert_eq!(table.listings[0].extra["floor"], CellValue::String("2".into()));
}

#[test]
fn test_csv_decimal_meters_without_suffix_is_load_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "decimal_meters.csv",
        "price,meters,rooms
300000,90,2
310000,90.0,2
",
    );

    match load(&path).unwrap_err() {
        LoadError::InvalidMeters { row, value } => {
            assert_eq!(row, 1);
            assert_eq!(value, CellValue::String("90.0".into()));
        }
        other => panic!("expected InvalidMeters, got {other:?}"),
    }
}

#[test]
fn test_load_workbook_first_sheet() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/listings.xlsx");

    let raw = read_raw(&path).expect("read workbook");
    assert_eq!(raw.headers, vec!["price", "meters", "rooms", "district"]);
    assert_eq!(raw.rows.len(), 3);
    assert!(raw.rows.iter().all(|row| row.len() == 4));

    let table = load(&path).expect("load workbook");

    assert_eq!(table.extra_columns, vec!["district".to_string()]);
    let summary: Vec<(f64, u32, u32)> = table.iter().map(|l| (l.price, l.meters, l.rooms)).collect();
    assert_eq!(
        summary,
        vec![(300000.0, 90, 2), (500000.0, 120, 3), (185000.0, 55, 1)]
    );
    assert_eq!(table.listings[0].extra["district"], CellValue::String("Triana".into()));
    assert_eq!(table.listings[1].extra["district"], CellValue::String("Nervión".into()));
    assert_eq!(table.listings[2].extra["district"], CellValue::Null);
}

#[test]
fn test_non_numeric_price_is_load_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "bad_price.csv",
        "price,meters,rooms\n300.000 €,90 m²,2 habitaciones\n",
    );

    assert!(matches!(load(&path), Err(LoadError::InvalidPrice { row: 0, .. })));
}

#[test]
fn test_missing_column_is_load_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "no_rooms.csv", "price,meters\n300000,90 m²\n");

    assert!(matches!(load(&path), Err(LoadError::MissingColumn("rooms"))));
}

#[test]
fn test_unreadable_sources() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("nope.csv");
    assert!(matches!(read_raw(&missing), Err(LoadError::Io { .. })));

    let txt = write_file(&dir, "listings.txt", "price,meters,rooms\n");
    assert!(matches!(read_raw(&txt), Err(LoadError::UnsupportedFormat(ext)) if ext == "txt"));

    let fake_xlsx = write_file(&dir, "listings.xlsx", "definitely not a zip archive");
    assert!(matches!(read_raw(&fake_xlsx), Err(LoadError::Workbook(_))));

    let not_array = write_file(&dir, "listings.json", r#"{"price": 1}"#);
    assert!(matches!(read_raw(&not_array), Err(LoadError::Malformed(_))));
}

#[test]
fn test_header_only_csv_gives_empty_table() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.csv", "price,meters,rooms\n");

    let table = load(&path).expect("load empty csv");
    assert!(table.is_empty());
    assert_eq!(table.price_range(), None);
}
