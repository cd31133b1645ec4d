//! CLI argument parsing for handin.
//!
//! Uses clap derive macros for declarative argument definitions.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Handin: check that an assignment submission follows the naming and
/// header convention before it is graded.
///
/// A submission is one document (`Author-AA-FF.ext`), a folder
/// (`Author-AA`), or a zip archive (`Author-AA.zip`) containing one folder.
/// Every document must open with a four-line header:
/// name, course code, date, and `Assignment-AA-FF`.
#[derive(Parser, Debug)]
#[command(name = "handin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Document, folder, or zip archive to check.
    pub path: PathBuf,

    /// Print the verdict as a JSON object on stdout.
    #[arg(long)]
    pub json: bool,

    /// Increase log detail (-v for progress, -vv for reader details).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Suppress diagnostics on stderr; only the exit code reports the verdict.
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory to unpack archives into (defaults to the system temp dir).
    #[arg(long, value_name = "DIR")]
    pub scratch_dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
