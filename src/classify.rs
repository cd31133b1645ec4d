//! Coarse file-type classification.
//!
//! Picks which header reader applies to a file, and whether a path should be
//! unpacked as an archive. Classification looks only at the name: the
//! extension after the first dot, plus a MIME guess for the basename.

use mime_guess::mime;
use std::path::Path;

/// The kinds of file a submission may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Anything with a `text/*` MIME type.
    Text,
    /// `.doc` / `.docx`.
    Word,
    /// `.pdf`.
    Pdf,
    /// `.zip`.
    Archive,
    /// No extension, or one we have no reader for.
    Unknown,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Text => write!(f, "text"),
            FileKind::Word => write!(f, "word"),
            FileKind::Pdf => write!(f, "pdf"),
            FileKind::Archive => write!(f, "archive"),
            FileKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classify a path by its basename.
///
/// A basename without a dot has no extension and is `Unknown`. Sub-folders
/// found while scanning a directory go through here as well, so a folder
/// named like a document is classified by name, never read.
pub fn classify(path: &Path) -> FileKind {
    let basename = file_name(path).to_lowercase();
    let Some((_, extension)) = basename.split_once('.') else {
        return FileKind::Unknown;
    };

    let is_text = mime_guess::from_path(&basename)
        .iter()
        .any(|guess| guess.type_() == mime::TEXT);
    if is_text {
        return FileKind::Text;
    }

    match extension {
        "doc" | "docx" => FileKind::Word,
        "pdf" => FileKind::Pdf,
        "zip" => FileKind::Archive,
        _ => FileKind::Unknown,
    }
}

/// The part of a basename before its first dot, case preserved.
pub fn document_stem(name: &str) -> &str {
    name.split_once('.').map_or(name, |(stem, _)| stem)
}

/// The basename of a path as a lossy string.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
