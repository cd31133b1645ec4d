//! Header-line extraction for submitted documents.
//!
//! The validators only need the first few lines of visible text in each
//! document. [`HeaderReader`] is the seam between them and the format
//! libraries; [`FormatReader`] is the implementation used by the CLI.
//!
//! Strategies per [`FileKind`]:
//! - Text: first four physical lines, empty ones included
//! - Word: paragraph text split on newlines, empty lines dropped
//! - PDF: first page only, split on newlines, empty lines dropped
//! - anything else: no lines

mod reader;


use crate::classify::FileKind;
use crate::error::Result;
use std::path::Path;

pub use reader::FormatReader;

/// Source of a document's header lines.
pub trait HeaderReader {
    /// Return up to the first four header lines of `path`.
    ///
    /// Kinds without a reader return an empty vector. Errors are reserved
    /// for files that exist but cannot be read or parsed.
    fn read_header_lines(&self, path: &Path, kind: FileKind) -> Result<Vec<String>>;
}
