//! Error types for recipe construction

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building recipe pages
#[derive(Debug, Error)]
pub enum CookbookError {
    #[error("unknown recipe: {0}")]
    UnknownRecipe(String),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("column {column} has {found} cells, expected {expected}")]
    ShapeMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("row {index} out of range for a table of {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },

    #[error("failed to read dataset {path:?}: {source}")]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, CookbookError>;
