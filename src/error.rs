//! Error types for job-gantt.
//!
//! Rendering never fails: bad timestamps and dangling dependency ids degrade
//! in place. Only loading, saving and exporting files can return an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for file operations.
#[derive(Error, Debug)]
pub enum GanttError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Duplicate task id '{0}' in task tree")]
    DuplicateTaskId(String),
}

impl GanttError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GanttError>;
