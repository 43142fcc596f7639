//! gitrig - drive git from your editor or terminal with path-scoped verbs
//!
//! The binary is a thin surface over the `gitrig` library: it parses
//! arguments, wires up the terminal prompt, and renders outcomes as human
//! text or JSON.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use colored::Colorize;

/// Main entry point for the gitrig CLI
fn main() {
    if let Err(err) = cli::run() {
        // A declined lock prompt is a cancellation, not a failure
        if err
            .downcast_ref::<gitrig::error::Error>()
            .is_some_and(gitrig::error::Error::is_cancel)
        {
            std::process::exit(0);
        }
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
