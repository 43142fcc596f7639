//! gitrig - a git command engine for editor integrations
//!
//! This library turns "a set of file-system paths the user picked somewhere"
//! into correct, minimal git invocations, and decodes git's line-oriented
//! output back into structured records (file statuses, branches, repo roots).
//!
//! The pieces compose strictly upward:
//! raw paths → [`selection`] → [`status`] → [`reduce`] → [`ops`] →
//! [`runner`] → decoders → caller.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod branch;
pub mod config;
pub mod error;
pub mod interact;
pub mod lock;
pub mod ops;
pub mod output;
pub mod reduce;
pub mod runner;
pub mod selection;
pub mod status;
