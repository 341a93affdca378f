use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::util::display::array_value_to_string;
use calamine::{open_workbook_auto, Data, Reader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::LoadError;
use super::model::{CellValue, ListingTable, RawTable};
use super::normalize::normalize;

/// Extensions accepted by [`read_raw`], used by the file dialog filter.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "xlsx", "xlsm", "xlsb", "xls", "ods", "csv", "json", "parquet", "pq",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and normalize a listings file in one step.
pub fn load(path: &Path) -> Result<ListingTable, LoadError> {
    let raw = read_raw(path)?;
    let table = normalize(raw)?;
    log::info!(
        "Loaded {} listings from {} (extra columns: {:?})",
        table.len(),
        path.display(),
        table.extra_columns
    );
    Ok(table)
}

/// Read a file into an untyped [`RawTable`].  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xls` / `.ods` … – first worksheet, first row is the header
/// * `.csv`     – header row followed by records
/// * `.json`    – `[{ "price": ..., "meters": "...", "rooms": "..." }, ...]`
/// * `.parquet` – flat columns of strings, ints, floats or bools
pub fn read_raw(path: &Path) -> Result<RawTable, LoadError> {
    std::fs::metadata(path).map_err(|e| LoadError::io(path, e))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_workbook(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Workbook loader
// ---------------------------------------------------------------------------

/// Only the first worksheet is read; the remaining sheets are ignored.
fn load_workbook(path: &Path) -> Result<RawTable, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::Malformed("workbook contains no worksheets".to_string()))??;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(RawTable::default());
    };
    let headers: Vec<String> = header_row.iter().map(|c| c.to_string()).collect();

    let body = rows
        .map(|row| pad_row(row.iter().map(workbook_cell).collect(), headers.len()))
        .collect();

    Ok(RawTable::new(headers, body))
}

fn workbook_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) if s.is_empty() => CellValue::Null,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTimeIso(d) => CellValue::Date(d.clone()),
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout:  header row with column names, one listing per record.
/// Fields stay text, as they would in the source sheet; only `price` is
/// read as a number, by the normalizer.
fn load_csv(path: &Path) -> Result<RawTable, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let mut reader = csv::Reader::from_reader(file);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let cells = record.iter().map(csv_cell).collect();
        rows.push(pad_row(cells, headers.len()));
    }

    Ok(RawTable::new(headers, rows))
}

fn csv_cell(s: &str) -> CellValue {
    if s.is_empty() {
        CellValue::Null
    } else {
        CellValue::String(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "price": 310000, "meters": "92 m²", "rooms": "3 habitaciones", "district": "Triana" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<RawTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root
        .as_array()
        .ok_or_else(|| LoadError::Malformed("expected top-level JSON array".to_string()))?;

    let mut headers: Vec<String> = Vec::new();
    let mut objects = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| LoadError::Malformed(format!("row {i} is not a JSON object")))?;
        for key in obj.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
        objects.push(obj);
    }

    let rows = objects
        .into_iter()
        .map(|obj| {
            headers
                .iter()
                .map(|h| obj.get(h).map(json_to_cell).unwrap_or(CellValue::Null))
                .collect()
        })
        .collect();

    Ok(RawTable::new(headers, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one listing per row.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).  Column types other than strings,
/// integers, floats and booleans are rendered to text.
fn load_parquet(path: &Path) -> Result<RawTable, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build()?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;
        for row in 0..batch.num_rows() {
            let cells = batch
                .columns()
                .iter()
                .map(|col| extract_cell(col, row))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(pad_row(cells, headers.len()));
        }
    }

    Ok(RawTable::new(headers, rows))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &Arc<dyn Array>, row: usize) -> Result<CellValue, LoadError> {
    if col.is_null(row) {
        return Ok(CellValue::Null);
    }
    let value = match col.data_type() {
        DataType::Utf8 => CellValue::String(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => CellValue::String(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => CellValue::Float(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => CellValue::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
        _ => CellValue::String(array_value_to_string(col.as_ref(), row)?),
    };
    Ok(value)
}

// -- helpers --

/// Short rows are padded with nulls so every row lines up with the header.
fn pad_row(mut cells: Vec<CellValue>, width: usize) -> Vec<CellValue> {
    if cells.len() < width {
        cells.resize(width, CellValue::Null);
    }
    cells
}
