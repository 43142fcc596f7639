//! Lock guard - avoids racing a concurrent git process
//!
//! git holds an exclusive operation lock by creating `.git/index.lock`.
//! This module only observes that sentinel; it never creates one.
//!
//! State machine: no lock → lock observed → retry after a fixed delay →
//! still present → ask the user → remove-and-continue or abort. Transient
//! locks from git's own fast internal operations are common, so the retry
//! happens before the user is ever bothered.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::interact::Prompt;

/// Sentinel path relative to the repository root
pub const LOCK_FILE: &str = ".git/index.lock";

/// Fixed wait before re-checking an observed lock
pub const RETRY_DELAY: Duration = Duration::from_millis(750);

/// Location of the lock sentinel for a repository
#[must_use]
pub fn lock_path(root: &Path) -> PathBuf {
    root.join(LOCK_FILE)
}

/// Remove the lock file, treating "already gone" as success
///
/// One consistent policy: `NotFound` during unlink means another process
/// released the lock first, which is exactly what we wanted. Every other
/// filesystem error propagates.
fn remove_lock(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Ensure no concurrent git process holds the repository lock
///
/// Returns [`Error::LockAbort`] when the user declines to remove a
/// persistent lock; the caller treats that as a silent cancellation.
pub fn ensure_unlocked(root: &Path, prompt: &dyn Prompt) -> Result<()> {
    let path = lock_path(root);
    if !path.exists() {
        return Ok(());
    }

    log::debug!("lock observed at {}, retrying", path.display());
    thread::sleep(RETRY_DELAY);
    if !path.exists() {
        return Ok(());
    }

    let confirmed = prompt.confirm(
        "Another git process seems to be running in this repository.",
        &format!(
            "Remove {} and continue? Only do this if no other git process is actually running.",
            path.display()
        ),
    );
    if confirmed {
        remove_lock(&path)?;
        Ok(())
    } else {
        Err(Error::LockAbort)
    }
}
