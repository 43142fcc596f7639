//! Discard changes to selected paths

use std::path::{Path, PathBuf};

use gitrig::ops::GitOps;
use gitrig::output::OutputMode;

use super::{absolutize, emit};

/// Discard the selection, or the whole repository when no paths are given
pub fn discard(ops: &GitOps<'_>, cwd: &Path, paths: &[PathBuf], mode: OutputMode) -> anyhow::Result<()> {
    let outcome = if paths.is_empty() {
        ops.discard_all(cwd)?
    } else {
        ops.discard(&absolutize(cwd, paths))?
    };
    emit(&outcome, mode)
}
