//! Merge a branch into the current one

use std::path::Path;

use gitrig::ops::GitOps;
use gitrig::output::OutputMode;

use super::emit;

/// Merge `target` into the current branch
pub fn merge(ops: &GitOps<'_>, cwd: &Path, target: &str, mode: OutputMode) -> anyhow::Result<()> {
    emit(&ops.merge(cwd, target)?, mode)
}
