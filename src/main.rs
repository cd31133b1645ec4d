//! Handin: naming and header convention checker for assignment submissions.
//!
//! This is the main entry point for the `handin` CLI. It parses arguments,
//! runs the checker on the given path, and maps the verdict to an exit code.

mod classify;
mod cli;
pub mod error;
pub mod exit_codes;
mod grammar;
mod header;
mod logging;
mod report;
mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use header::FormatReader;
use report::Report;
use std::process::ExitCode;
use validate::Checker;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose, cli.quiet);

    let mut checker = Checker::new(&FormatReader);
    if let Some(dir) = &cli.scratch_dir {
        checker = checker.with_scratch_root(dir);
    }

    let verdict = match checker.check(&cli.path) {
        Ok(verdict) => verdict,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    if cli.json {
        let report = Report::new(&cli.path, verdict.as_ref(), checker.rejections());
        println!("{}", report.to_json());
    }

    match verdict {
        Some(accepted) => {
            tracing::info!(
                author = accepted.author(),
                assignment = accepted.assignment(),
                "submission accepted"
            );
            if !cli.json {
                println!("Looks good!");
            }
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        None => ExitCode::from(exit_codes::REJECTED as u8),
    }
}
