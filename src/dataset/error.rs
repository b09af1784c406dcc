//! Dataset loading error types
//!
//! Every variant is fatal at startup: the dashboard has nothing to show
//! without a dataset.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the launch dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// File missing or unreadable
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A data row could not be parsed
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// Header present but no data rows
    #[error("Dataset contains no rows")]
    EmptyDataset,
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(e) => LoadError::Io {
                path: PathBuf::new(),
                source: e,
            },
            kind => LoadError::MalformedRow {
                line,
                reason: format!("{:?}", kind),
            },
        }
    }
}

impl LoadError {
    /// Fill in the file path of an `Io` error raised while reading rows
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            LoadError::Io { source, .. } => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

/// Result type alias for dataset loading
pub type LoadResult<T> = Result<T, LoadError>;
