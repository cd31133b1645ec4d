//! Folder validation and cross-document consistency.

use super::{Checker, Rejection, Submission};
use crate::classify::{classify, file_name};
use crate::error::{CheckError, Result};
use crate::grammar::match_folder_name;
use std::collections::HashSet;
use std::path::Path;

impl Checker<'_> {
    /// Validate a folder and every entry inside it.
    ///
    /// A bad document fails the folder but the scan goes on, so every
    /// document gets its own diagnostic. Symbolic links are never followed. A repeated file number stops the
    /// scan at once. Entry order is whatever the filesystem returns.
    pub fn check_dir(&mut self, path: &Path) -> Result<Option<Submission>> {
        let name = file_name(path);

        let Some(declared) = match_folder_name(&name) else {
            self.reject(Rejection::NameFormat { name });
            return Ok(None);
        };

        let mut all_valid = true;
        let mut authors = HashSet::new();
        let mut assignments = HashSet::new();
        let mut file_numbers = HashSet::new();

        let entries = std::fs::read_dir(path).map_err(|e| CheckError::io(path, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| CheckError::io(path, e))?;
            let document = entry.path();

            let file_type = entry.file_type().map_err(|e| CheckError::io(&document, e))?;
            if file_type.is_symlink() {
                self.reject(Rejection::SymbolicLink {
                    name: file_name(&document),
                });
                all_valid = false;
                continue;
            }

            let Some(identity) = self.check_document(&document, classify(&document))? else {
                all_valid = false;
                continue;
            };

            authors.insert(identity.author);
            assignments.insert(identity.assignment);
            if !file_numbers.insert(identity.file_number) {
                self.reject(Rejection::DuplicateFileNumber {
                    name: file_name(&document),
                });
                return Ok(None);
            }
        }

        if authors.len() > 1 {
            self.reject(Rejection::MixedAuthors { name });
            return Ok(None);
        }
        if assignments.len() > 1 {
            self.reject(Rejection::MixedAssignments { name });
            return Ok(None);
        }

        // Contents agree with each other; now they must agree with the folder.
        if authors.iter().any(|author| *author != declared.author) {
            self.reject(Rejection::AuthorMismatch { name });
            return Ok(None);
        }
        if assignments
            .iter()
            .any(|assignment| *assignment != declared.assignment)
        {
            self.reject(Rejection::AssignmentMismatch { name });
            return Ok(None);
        }

        if !all_valid {
            return Ok(None);
        }

        tracing::debug!(
            folder = %name,
            documents = file_numbers.len(),
            "folder accepted"
        );
        Ok(Some(declared))
    }
}
