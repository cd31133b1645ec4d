//! Compiled name and header patterns.

use crate::validate::{Identity, Submission};
use regex::Regex;
use std::sync::LazyLock;

/// Number of header lines every document must open with.
pub const HEADER_LINES: usize = 4;

// Digits are spelled [0-9]: the regex crate's \d also matches non-ASCII digits.
static DOCUMENT_STEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z]+)-([0-9]{2})-([0-9]{2})$").expect("Invalid document stem regex")
});

static FOLDER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z]+)-([0-9]{2})$").expect("Invalid folder name regex")
});

static ARCHIVE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z]+)-([0-9]{2})\.zip$").expect("Invalid archive name regex")
});

static HEADER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# ([A-Z][a-z]+), ([A-Z][a-z]+)$").expect("Invalid header name regex")
});

static HEADER_COURSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# 100[0-9]-[0-9]{3}-[0-9]{3}$").expect("Invalid header course regex")
});

// Shape only: 2024-13-40 passes.
static HEADER_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# [0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid header date regex")
});

static HEADER_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# Assignment-([0-9]{2})-([0-9]{2})$").expect("Invalid header assignment regex")
});

/// Match a document stem (`Author-AA-FF`) and extract its identity.
pub fn match_document_stem(stem: &str) -> Option<Identity> {
    let caps = DOCUMENT_STEM.captures(stem)?;
    Some(Identity::new(&caps[1], &caps[2], &caps[3]))
}

/// Match a folder name (`Author-AA`).
pub fn match_folder_name(name: &str) -> Option<Submission> {
    let caps = FOLDER_NAME.captures(name)?;
    Some(Submission::new(&caps[1], &caps[2]))
}

/// Match a full archive filename (`Author-AA.zip`).
///
/// The extension is part of the pattern and is case-sensitive.
pub fn match_archive_name(name: &str) -> Option<Submission> {
    let caps = ARCHIVE_NAME.captures(name)?;
    Some(Submission::new(&caps[1], &caps[2]))
}

/// Why a single header line was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLineError {
    /// The line does not have the required shape.
    Format,
    /// The line is well formed but names a different author or number
    /// than the filename.
    Mismatch,
}

/// Check header line `number` (1-based) against the document's identity.
///
/// The line is trimmed before matching. Numbers outside `1..=4` are
/// reported as format errors.
///
/// # Returns
///
/// * `Ok(())` - The line is well formed and agrees with `identity`
/// * `Err(HeaderLineError::Format)` - The line has the wrong shape
/// * `Err(HeaderLineError::Mismatch)` - The line disagrees with the filename
pub fn check_header_line(
    number: usize,
    line: &str,
    identity: &Identity,
) -> Result<(), HeaderLineError> {
    let line = line.trim();
    match number {
        1 => {
            let caps = HEADER_NAME.captures(line).ok_or(HeaderLineError::Format)?;
            if caps[1] != identity.author {
                return Err(HeaderLineError::Mismatch);
            }
            Ok(())
        }
        2 if HEADER_COURSE.is_match(line) => Ok(()),
        3 if HEADER_DATE.is_match(line) => Ok(()),
        4 => {
            let caps = HEADER_ASSIGNMENT
                .captures(line)
                .ok_or(HeaderLineError::Format)?;
            if caps[1] != identity.assignment || caps[2] != identity.file_number {
                return Err(HeaderLineError::Mismatch);
            }
            Ok(())
        }
        _ => Err(HeaderLineError::Format),
    }
}
