//! Error taxonomy for the engine
//!
//! Four families, matching how they are handled:
//! - process failures: git exited non-zero, propagated with captured output
//! - decode failures: unrecognized status/branch tokens, always fatal
//! - policy failures: raised before any process is spawned, zero side effects
//! - concurrency failures: lock detected and the user declined to proceed

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the engine
pub type Result<T> = std::result::Result<T, Error>;

/// All failures the engine can surface
#[derive(Debug, Error)]
pub enum Error {
    /// git exited with a non-zero status
    #[error("git exited with status {code}:\n{output}")]
    Process {
        /// Exit code reported by the process (-1 if terminated by signal)
        code: i32,
        /// Combined stdout+stderr captured from the process
        output: String,
    },

    /// A two-character status token outside the known enumeration
    ///
    /// Never ignored: an unrecognized status could hide an unsafe
    /// destructive action.
    #[error("unrecognized status code {code:?} for {file:?}")]
    UnknownStatusCode {
        /// The offending two-character token
        code: String,
        /// The file the token was reported for
        file: String,
    },

    /// A status line too short to carry a code and a path
    #[error("malformed status line: {0:?}")]
    MalformedStatusLine(String),

    /// Selected paths resolve to more than one repository root
    ///
    /// Operations never span repositories implicitly.
    #[error("selected files are not in the same repository ({} roots)", roots.len())]
    MultiRoot {
        /// The distinct roots that were found
        roots: Vec<PathBuf>,
    },

    /// The user declined to remove a repository lock
    ///
    /// A silent cancellation, not a failure; see [`Error::is_cancel`].
    #[error("operation canceled: repository is locked by another process")]
    LockAbort,

    /// An operation that requires files was given none
    #[error("no files selected")]
    EmptySelection,

    /// A commit was attempted with a blank message
    #[error("commit message must not be empty")]
    EmptyMessage,

    /// git produced output that is not valid UTF-8
    #[error("git produced non-UTF-8 output")]
    NonUtf8Output,

    /// Filesystem or process-spawn error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a user cancellation rather than a true failure
    ///
    /// Cancellations are reported quietly; everything else is an error
    /// notification.
    #[must_use]
    pub const fn is_cancel(&self) -> bool {
        matches!(self, Self::LockAbort)
    }
}
