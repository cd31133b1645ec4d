//! Core types for submission validation.

use crate::classify::FileKind;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// The identity a single document claims through its name and header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Capitalized author name, e.g. `Smith`.
    pub author: String,
    /// Two-digit assignment number.
    pub assignment: String,
    /// Two-digit file number within the assignment.
    pub file_number: String,
}

impl Identity {
    /// Create a new identity.
    pub fn new(
        author: impl Into<String>,
        assignment: impl Into<String>,
        file_number: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            assignment: assignment.into(),
            file_number: file_number.into(),
        }
    }
}

/// The identity a folder or archive claims. File numbers have no meaning
/// at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub author: String,
    pub assignment: String,
}

impl Submission {
    /// Create a new submission identity.
    pub fn new(author: impl Into<String>, assignment: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            assignment: assignment.into(),
        }
    }
}

/// A top-level path after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionUnit {
    Document(PathBuf, FileKind),
    Directory(PathBuf),
    Archive(PathBuf),
}

/// What an accepted top-level path turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accepted {
    Document(Identity),
    Submission(Submission),
}

impl Accepted {
    /// Author of the accepted unit.
    pub fn author(&self) -> &str {
        match self {
            Accepted::Document(id) => &id.author,
            Accepted::Submission(sub) => &sub.author,
        }
    }

    /// Assignment number of the accepted unit.
    pub fn assignment(&self) -> &str {
        match self {
            Accepted::Document(id) => &id.assignment,
            Accepted::Submission(sub) => &sub.assignment,
        }
    }
}

/// Category of a convention violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    NameFormat,
    HeaderFormat,
    IdentityMismatch,
    Structural,
    DuplicateFileNumber,
    Consistency,
    NotFound,
    UnknownType,
}

/// A single convention violation, named after the entity that broke it.
///
/// The `Display` text is the diagnostic line shown to the student.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("'{name}' doesn't meet name requirements")]
    NameFormat { name: String },

    #[error("'{name}' doesn't have 4 header lines")]
    MissingHeader { name: String },

    /// Header line `line` has the wrong shape.
    #[error("'{name}' has invalid header line #{line}")]
    HeaderFormat { name: String, line: usize },

    /// Header line `line` disagrees with the filename.
    #[error("'{name}' has invalid header line #{line}")]
    HeaderMismatch { name: String, line: usize },

    #[error("'{name}' has invalid author")]
    AuthorMismatch { name: String },

    #[error("'{name}' has invalid assignment number")]
    AssignmentMismatch { name: String },

    #[error("'{name}' needs to have a single folder")]
    NotSingleFolder { name: String },

    /// A folder entry is a symbolic link; its target lies outside the submission.
    #[error("'{name}' is a symbolic link")]
    SymbolicLink { name: String },

    #[error("'{name}' has duplicate document number")]
    DuplicateFileNumber { name: String },

    #[error("'{name}' has files with invalid author")]
    MixedAuthors { name: String },

    #[error("'{name}' has files with invalid assignment number")]
    MixedAssignments { name: String },

    #[error("'{name}' doesn't exist")]
    NotFound { name: String },

    #[error("'{name}' has unknown filetype")]
    UnknownType { name: String },
}

impl Rejection {
    /// The category this violation belongs to.
    pub fn kind(&self) -> RejectionKind {
        match self {
            Rejection::NameFormat { .. } => RejectionKind::NameFormat,
            Rejection::MissingHeader { .. } | Rejection::HeaderFormat { .. } => {
                RejectionKind::HeaderFormat
            }
            Rejection::HeaderMismatch { .. }
            | Rejection::AuthorMismatch { .. }
            | Rejection::AssignmentMismatch { .. } => RejectionKind::IdentityMismatch,
            Rejection::NotSingleFolder { .. } | Rejection::SymbolicLink { .. } => {
                RejectionKind::Structural
            }
            Rejection::DuplicateFileNumber { .. } => RejectionKind::DuplicateFileNumber,
            Rejection::MixedAuthors { .. } | Rejection::MixedAssignments { .. } => {
                RejectionKind::Consistency
            }
            Rejection::NotFound { .. } => RejectionKind::NotFound,
            Rejection::UnknownType { .. } => RejectionKind::UnknownType,
        }
    }
}
