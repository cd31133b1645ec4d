//! Format-specific header readers.

use super::HeaderReader;
use crate::classify::FileKind;
use crate::error::{CheckError, Result};
use crate::grammar::HEADER_LINES;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads header lines with the format libraries: `docx-rs` for Word and
/// `pdf-extract` for PDF.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormatReader;

impl HeaderReader for FormatReader {
    fn read_header_lines(&self, path: &Path, kind: FileKind) -> Result<Vec<String>> {
        match kind {
            FileKind::Text => read_text(path),
            FileKind::Word => read_docx(path),
            FileKind::Pdf => read_pdf(path),
            FileKind::Archive | FileKind::Unknown => Ok(Vec::new()),
        }
    }
}

/// First physical lines of a text file, unfiltered.
fn read_text(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| CheckError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::with_capacity(HEADER_LINES);
    let mut buf = Vec::new();

    while lines.len() < HEADER_LINES {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| CheckError::io(path, e))?;
        if read == 0 {
            break;
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}

fn read_docx(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| CheckError::io(path, e))?;
    let doc = guarded_parse(path, || docx_rs::read_docx(&bytes))?;

    let mut text = String::new();
    for child in &doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            paragraph_text(&para.children, &mut text);
            text.push('\n');
        }
    }

    tracing::debug!(path = %path.display(), chars = text.len(), "extracted docx text");
    Ok(non_empty_lines(&text))
}

/// Flatten the visible text of a paragraph, hyperlinks included.
fn paragraph_text(children: &[docx_rs::ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        docx_rs::RunChild::Text(t) => out.push_str(&t.text),
                        docx_rs::RunChild::Tab(_) => out.push('\t'),
                        docx_rs::RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => paragraph_text(&link.children, out),
            _ => {}
        }
    }
}

fn read_pdf(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| CheckError::io(path, e))?;
    let pages = guarded_parse(path, || pdf_extract::extract_text_from_mem_by_pages(&bytes))?;

    let first = pages.first().map(String::as_str).unwrap_or_default();
    tracing::debug!(
        path = %path.display(),
        pages = pages.len(),
        chars = first.len(),
        "extracted pdf text"
    );
    Ok(non_empty_lines(first))
}

/// Run a document parser, turning both its errors and its panics into
/// `CheckError::Document`.
///
/// pdf-extract panics on some malformed fonts and docx-rs on some malformed
/// XML; either way the document is corrupt, not the checker.
fn guarded_parse<T, E, F>(path: &Path, parse: F) -> Result<T>
where
    E: std::fmt::Display,
    F: FnOnce() -> std::result::Result<T, E> + std::panic::UnwindSafe,
{
    match std::panic::catch_unwind(parse) {
        Ok(Ok(parsed)) => Ok(parsed),
        Ok(Err(e)) => Err(CheckError::document(path, e.to_string())),
        Err(_) => {
            tracing::warn!(path = %path.display(), "document parser panicked");
            Err(CheckError::document(path, "parser panicked on malformed input"))
        }
    }
}

/// Trimmed, non-empty lines of `text`, at most [`HEADER_LINES`] of them.
pub(super) fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(HEADER_LINES)
        .map(str::to_string)
        .collect()
}
