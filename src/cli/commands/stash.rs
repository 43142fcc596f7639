//! Stash operations

use std::path::Path;

use gitrig::ops::GitOps;
use gitrig::output::OutputMode;

use super::emit;
use crate::cli::app::StashAction;

/// Run a stash action; the default lists entries
pub fn stash(
    ops: &GitOps<'_>,
    cwd: &Path,
    action: Option<StashAction>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        Some(StashAction::Save { message }) => {
            emit(&ops.stash_save(cwd, message.as_deref())?, mode)
        }
        Some(StashAction::Pop) => emit(&ops.stash_pop(cwd)?, mode),
        Some(StashAction::Apply { index }) => emit(&ops.stash_apply(cwd, index)?, mode),
        Some(StashAction::Drop { index }) => emit(&ops.stash_drop(cwd, index)?, mode),
        Some(StashAction::List) | None => list(ops, cwd, mode),
    }
}

fn list(ops: &GitOps<'_>, cwd: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let entries = ops.stash_list(cwd)?;
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputMode::Human => {
            if entries.is_empty() {
                println!("No stash entries");
            }
            for entry in entries {
                println!("{entry}");
            }
        }
    }
    Ok(())
}
