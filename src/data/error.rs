//! Error types for the data layer.
//!
//! `LoadError` is fatal for a session: no partial table is ever produced.
//! `EmptyResultWarning` is an expected steady state and only ever travels
//! as a value.

use std::path::PathBuf;

use thiserror::Error;

use super::model::CellValue;

/// Errors raised while reading or normalizing a listings source.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("malformed source: {0}")]
    Malformed(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: price {value} is not a number")]
    InvalidPrice { row: usize, value: CellValue },

    #[error("row {row}: meters {value} is not a whole number of m²")]
    InvalidMeters { row: usize, value: CellValue },

    #[error("row {row}: rooms {value} contains no room count")]
    InvalidRooms { row: usize, value: CellValue },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }

    /// Data row that failed normalization, if the error is row-specific.
    pub fn row(&self) -> Option<usize> {
        match self {
            LoadError::InvalidPrice { row, .. }
            | LoadError::InvalidMeters { row, .. }
            | LoadError::InvalidRooms { row, .. } => Some(*row),
            _ => None,
        }
    }
}

/// The current filters leave no listings to summarise.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No listings match the current filters")]
pub struct EmptyResultWarning;
