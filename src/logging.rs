//! Diagnostic output setup.
//!
//! Rejections are logged at `warn`, progress at `info`/`debug`. Everything
//! goes to stderr so stdout stays free for the verdict. `RUST_LOG`
//! overrides the level chosen from the command line.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity flags.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "off";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Call once, from `main`.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    // Diagnostics are read by students: no timestamps, levels, or targets.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_level(verbose > 0)
        .with_target(false)
        .init();
}
