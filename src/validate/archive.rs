//! Zip archive validation.

use super::{Checker, Rejection, Submission};
use crate::classify::file_name;
use crate::error::{CheckError, Result};
use crate::grammar::match_archive_name;
use std::fs::File;
use std::path::Path;
use tempfile::TempDir;

impl Checker<'_> {
    /// Validate an archive: its name, its layout, and the folder inside.
    ///
    /// The archive is unpacked into a fresh temporary directory that is
    /// removed when this call returns, whichever way it returns.
    pub fn check_zip(&mut self, path: &Path) -> Result<Option<Submission>> {
        let name = file_name(path);

        let Some(declared) = match_archive_name(&name) else {
            self.reject(Rejection::NameFormat { name });
            return Ok(None);
        };

        let scratch = match &self.scratch_root {
            Some(root) => TempDir::new_in(root).map_err(|e| CheckError::io(root, e))?,
            None => TempDir::new().map_err(|e| CheckError::io(path, e))?,
        };
        self.check_unpacked(path, &name, &declared, scratch.path())
    }

    fn check_unpacked(
        &mut self,
        archive: &Path,
        name: &str,
        declared: &Submission,
        scratch: &Path,
    ) -> Result<Option<Submission>> {
        let file = File::open(archive).map_err(|e| CheckError::io(archive, e))?;
        let mut zip = zip::ZipArchive::new(file).map_err(|e| CheckError::zip(archive, e))?;
        zip.extract(scratch)
            .map_err(|e| CheckError::zip(archive, e))?;
        tracing::debug!(archive = %name, entries = zip.len(), "archive extracted");

        let mut top_level = Vec::new();
        for entry in std::fs::read_dir(scratch).map_err(|e| CheckError::io(scratch, e))? {
            let entry = entry.map_err(|e| CheckError::io(scratch, e))?;
            // DirEntry::file_type does not follow links: a symlinked folder is not a folder.
            let file_type = entry.file_type().map_err(|e| CheckError::io(scratch, e))?;
            top_level.push((entry.path(), file_type.is_dir()));
        }

        let folder = match top_level.as_slice() {
            [(only, true)] => only,
            _ => {
                self.reject(Rejection::NotSingleFolder {
                    name: name.to_string(),
                });
                return Ok(None);
            }
        };

        let Some(found) = self.check_dir(folder)? else {
            return Ok(None);
        };

        if found.author != declared.author {
            self.reject(Rejection::AuthorMismatch {
                name: file_name(folder),
            });
            return Ok(None);
        }
        if found.assignment != declared.assignment {
            self.reject(Rejection::AssignmentMismatch {
                name: file_name(folder),
            });
            return Ok(None);
        }

        Ok(Some(found))
    }
}
