//! Single-document validation.

use super::{Checker, Identity, Rejection};
use crate::classify::{FileKind, document_stem, file_name};
use crate::error::Result;
use crate::grammar::{HEADER_LINES, HeaderLineError, check_header_line, match_document_stem};
use std::path::Path;

impl Checker<'_> {
    /// Validate one document's filename and header.
    ///
    /// The identity comes from the filename; the header is only checked
    /// against it. Stops at the first violation.
    pub fn check_document(&mut self, path: &Path, kind: FileKind) -> Result<Option<Identity>> {
        let name = file_name(path);

        let Some(identity) = match_document_stem(document_stem(&name)) else {
            self.reject(Rejection::NameFormat { name });
            return Ok(None);
        };

        let header = self.reader.read_header_lines(path, kind)?;
        if header.len() < HEADER_LINES {
            self.reject(Rejection::MissingHeader { name });
            return Ok(None);
        }

        for (index, line) in header.iter().take(HEADER_LINES).enumerate() {
            let line_number = index + 1;
            match check_header_line(line_number, line, &identity) {
                Ok(()) => {}
                Err(HeaderLineError::Format) => {
                    self.reject(Rejection::HeaderFormat {
                        name,
                        line: line_number,
                    });
                    return Ok(None);
                }
                Err(HeaderLineError::Mismatch) => {
                    self.reject(Rejection::HeaderMismatch {
                        name,
                        line: line_number,
                    });
                    return Ok(None);
                }
            }
        }

        tracing::debug!(document = %name, %kind, "document accepted");
        Ok(Some(identity))
    }
}
