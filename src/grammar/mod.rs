//! Naming and header grammar for submissions.
//!
//! Every name in a submission carries the author's identity:
//! - documents are named `Author-AA-FF.<ext>`
//! - folders are named `Author-AA`
//! - archives are named `Author-AA.zip`
//!
//! Each document additionally opens with a four-line header:
//!
//! ```text
//! # First, Last
//! # 100D-DDD-DDD
//! # YYYY-MM-DD
//! # Assignment-AA-FF
//! ```
//!
//! All matching is anchored: a name that merely starts with a valid prefix
//! is rejected. The functions here are pure and hold no state beyond the
//! compiled patterns.

mod patterns;


pub use patterns::{
    HEADER_LINES, HeaderLineError, check_header_line, match_archive_name, match_document_stem,
    match_folder_name,
};
