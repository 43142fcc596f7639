//! Fetch, pull, and push

use std::path::{Path, PathBuf};

use colored::Colorize;
use gitrig::ops::GitOps;
use gitrig::output::OutputMode;

use super::emit;

/// Fetch the current repository, or several roots in parallel
pub fn fetch(ops: &GitOps<'_>, cwd: &Path, all_roots: &[PathBuf], mode: OutputMode) -> anyhow::Result<()> {
    if all_roots.is_empty() {
        return emit(&ops.fetch(cwd)?, mode);
    }

    let summary = ops.fetch_all(all_roots);
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputMode::Human => {
            let line = format!("Fetched {} root(s), {} failed", summary.succeeded, summary.failed);
            if summary.failed == 0 {
                println!("{}", line.green());
            } else {
                println!("{}", line.yellow());
            }
        }
    }
    Ok(())
}

/// Pull the current branch
pub fn pull(ops: &GitOps<'_>, cwd: &Path, mode: OutputMode) -> anyhow::Result<()> {
    emit(&ops.pull(cwd)?, mode)
}

/// Push the current branch
pub fn push(ops: &GitOps<'_>, cwd: &Path, mode: OutputMode) -> anyhow::Result<()> {
    emit(&ops.push(cwd)?, mode)
}
