//! Messages about the run itself
//!
//! pagefix writes exactly one line per page plus the completion line to
//! stdout. Anything else the user should see (a config file that isn't
//! there, a run aborted by an I/O error) goes to stderr in color through
//! these helpers, so redirecting stdout yields a clean per-page report.

use owo_colors::OwoColorize;

/// Print a yellow notice about the run, e.g. a missing `--config` file
pub fn warn(message: &str) {
    eprintln!("\n{}\n", message.yellow());
}

/// Print the red error that ends an aborted run
pub fn error(message: &str) {
    eprintln!("\n{}\n", message.red());
}
