//! Persistence for boards: JSON files on disk plus CSV exchange with
//! spreadsheets.

pub mod csv_export;
pub mod csv_import;
pub mod file;

use thiserror::Error;

pub use csv_export::export_work_orders;
pub use csv_import::import_work_orders;
pub use file::{default_board_path, load_board, load_or_sample, save_board};

/// Store-level failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed board file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv file is empty or has no data rows")]
    EmptyCsv,
    #[error("no valid work orders found in csv ({skipped} rows skipped)")]
    NoValidRows { skipped: usize },
    #[error("csv is missing required columns, found headers {found:?}")]
    MissingColumns { found: Vec<String> },
}

pub type StoreResult<T> = Result<T, StoreError>;
