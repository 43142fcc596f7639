//! Commit selected paths

use std::path::{Path, PathBuf};

use gitrig::ops::GitOps;
use gitrig::output::OutputMode;

use super::{emit, selection_or_cwd};

/// Commit the selection with `message`
pub fn commit(
    ops: &GitOps<'_>,
    cwd: &Path,
    paths: &[PathBuf],
    message: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let selection = selection_or_cwd(cwd, paths);
    let outcome = ops.commit(&selection, message)?;
    emit(&outcome, mode)
}
