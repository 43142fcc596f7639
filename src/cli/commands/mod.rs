//! Subcommand implementations

pub mod branch;
pub mod commit;
pub mod discard;
pub mod merge;
pub mod stash;
pub mod status;
pub mod sync;

use std::path::{Path, PathBuf};

use colored::Colorize;
use gitrig::output::{Outcome, OutputMode};

/// Make selection paths absolute
///
/// Canonicalizes when possible; a path that no longer exists (a deleted
/// file picked from a status view) is joined onto `cwd` instead.
pub(crate) fn absolutize(cwd: &Path, paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .map(|p| p.canonicalize().unwrap_or_else(|_| if p.is_absolute() { p.clone() } else { cwd.join(p) }))
        .collect()
}

/// Selection paths for a verb: explicit paths, or the whole repository
pub(crate) fn selection_or_cwd(cwd: &Path, paths: &[PathBuf]) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![cwd.to_path_buf()]
    } else {
        absolutize(cwd, paths)
    }
}

/// Render an outcome in the requested mode
pub(crate) fn emit(outcome: &Outcome, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(outcome)?),
        OutputMode::Human => {
            println!("{}", outcome.title.green().bold());
            if !outcome.message.is_empty() {
                println!("{}", outcome.message);
            }
        }
    }
    Ok(())
}
