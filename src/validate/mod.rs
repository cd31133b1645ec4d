//! Submission validation for handin.
//!
//! A submission is a document, a folder of documents, or a zip archive
//! holding one such folder. Validation walks down that structure:
//! - documents: name grammar, then the four-line header
//! - folders: name grammar, every document, then cross-document consistency
//! - archives: name grammar, unpack, single top-level folder, then the folder
//!
//! Convention violations are recorded as [`Rejection`]s on the [`Checker`]
//! and logged once where they are detected. Only faults from the readers and
//! the unpacker surface as errors.

mod archive;
mod directory;
mod document;
mod types;


pub use types::{Accepted, Identity, Rejection, RejectionKind, Submission, SubmissionUnit};

use crate::classify::{FileKind, classify, file_name};
use crate::error::Result;
use crate::header::HeaderReader;
use std::path::{Path, PathBuf};

/// Runs the checks for one submission and collects what went wrong.
///
/// A checker is cheap; create one per top-level path.
pub struct Checker<'a> {
    reader: &'a dyn HeaderReader,
    scratch_root: Option<PathBuf>,
    rejections: Vec<Rejection>,
}

impl<'a> Checker<'a> {
    /// Create a checker that reads document headers through `reader`.
    pub fn new(reader: &'a dyn HeaderReader) -> Self {
        Self {
            reader,
            scratch_root: None,
            rejections: Vec::new(),
        }
    }

    /// Unpack archives under `root` instead of the system temp directory.
    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(root.into());
        self
    }

    /// Every rejection recorded so far, in detection order.
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Check any top-level path.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(_))` - The submission follows the convention
    /// * `Ok(None)` - The submission was rejected; see [`Checker::rejections`]
    /// * `Err(_)` - A document or archive could not be read at all
    pub fn check(&mut self, path: &Path) -> Result<Option<Accepted>> {
        let Some(unit) = self.resolve(path) else {
            return Ok(None);
        };

        tracing::debug!(?unit, "dispatching submission");
        match unit {
            SubmissionUnit::Directory(dir) => {
                Ok(self.check_dir(&dir)?.map(Accepted::Submission))
            }
            SubmissionUnit::Archive(archive) => {
                Ok(self.check_zip(&archive)?.map(Accepted::Submission))
            }
            SubmissionUnit::Document(doc, kind) => {
                Ok(self.check_document(&doc, kind)?.map(Accepted::Document))
            }
        }
    }

    /// Classify a top-level path, rejecting paths that cannot be checked.
    fn resolve(&mut self, path: &Path) -> Option<SubmissionUnit> {
        if !path.exists() {
            self.reject(Rejection::NotFound {
                name: file_name(path),
            });
            return None;
        }
        if path.is_dir() {
            return Some(SubmissionUnit::Directory(path.to_path_buf()));
        }

        match classify(path) {
            FileKind::Unknown => {
                self.reject(Rejection::UnknownType {
                    name: file_name(path),
                });
                None
            }
            FileKind::Archive => Some(SubmissionUnit::Archive(path.to_path_buf())),
            kind => Some(SubmissionUnit::Document(path.to_path_buf(), kind)),
        }
    }

    /// Record and log a violation.
    fn reject(&mut self, rejection: Rejection) {
        tracing::warn!(":: {}", rejection);
        self.rejections.push(rejection);
    }
}
