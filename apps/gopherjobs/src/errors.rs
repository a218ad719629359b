use std::path::PathBuf;

use thiserror::Error;

use crate::ingest::quoting::QuoteError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Pipeline-level error type.
/// Every variant names the path it concerns; the first error aborts the run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed reading CSV {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: CsvFault,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Failed to render template for {}: {source}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: askama::Error,
    },
}

/// Why a CSV file was rejected.
#[derive(Debug, Error)]
pub enum CsvFault {
    #[error(transparent)]
    Decode(#[from] csv::Error),

    #[error(transparent)]
    Quoting(#[from] QuoteError),
}

impl AppError {
    pub fn parse(path: impl Into<PathBuf>, source: impl Into<CsvFault>) -> Self {
        AppError::Parse {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
