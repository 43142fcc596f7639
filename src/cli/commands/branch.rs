//! Branch listing and management

use std::path::Path;

use colored::Colorize;
use gitrig::ops::GitOps;
use gitrig::output::{BranchReport, OutputMode};

use super::emit;
use crate::cli::app::BranchAction;

/// List branches or run a branch action
pub fn branch(
    ops: &GitOps<'_>,
    cwd: &Path,
    action: Option<BranchAction>,
    all: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        None => list(ops, cwd, all, mode),
        Some(BranchAction::New { name }) => emit(&ops.create_branch(cwd, &name)?, mode),
        Some(BranchAction::Delete { name, force }) => {
            emit(&ops.delete_branch(cwd, &name, force)?, mode)
        }
        Some(BranchAction::Switch { name }) => emit(&ops.switch_branch(cwd, &name)?, mode),
    }
}

fn list(ops: &GitOps<'_>, cwd: &Path, all: bool, mode: OutputMode) -> anyhow::Result<()> {
    let report = BranchReport {
        branches: ops.branches(cwd, all)?,
    };

    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputMode::Human => {
            for branch in &report.branches {
                let marker = if branch.selected { "*" } else { " " };
                let mut scope = String::new();
                if branch.local {
                    scope.push('l');
                }
                if branch.remote {
                    scope.push('r');
                }
                let name = if branch.selected {
                    branch.name.green().bold().to_string()
                } else {
                    branch.name.clone()
                };
                println!("{marker} {name} [{scope}]");
            }
        }
    }
    Ok(())
}
