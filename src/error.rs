//! Error types for handin.
//!
//! Convention violations are not errors: they are [`Rejection`]s recorded by
//! the checker. `CheckError` covers faults from the collaborators that read
//! files and unpack archives, which mean the input itself is broken.
//!
//! [`Rejection`]: crate::validate::Rejection

use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fault raised while reading a submission.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Filesystem access failed.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive could not be opened or extracted.
    #[error("failed to unpack '{}': {source}", .path.display())]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// A Word or PDF document could not be parsed.
    #[error("failed to parse '{}': {message}", .path.display())]
    Document { path: PathBuf, message: String },
}

impl CheckError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CheckError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wrap a zip error with the archive it happened on.
    pub fn zip(path: &Path, source: zip::result::ZipError) -> Self {
        CheckError::Zip {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wrap a document parser failure.
    pub fn document(path: &Path, message: impl Into<String>) -> Self {
        CheckError::Document {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAULT
    }
}

/// Result type alias for handin operations.
pub type Result<T> = std::result::Result<T, CheckError>;
