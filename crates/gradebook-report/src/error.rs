//! Report error types.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while saving a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file could not be created or truncated.
    #[error("cannot create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the report failed partway; the file may be
    /// incomplete.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    /// The path the failed report was meant for.
    pub fn path(&self) -> &Path {
        match self {
            ReportError::Create { path, .. } | ReportError::Write { path, .. } => path,
        }
    }
}
