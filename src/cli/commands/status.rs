//! Show decoded working-tree status

use std::path::{Path, PathBuf};

use colored::Colorize;
use gitrig::ops::GitOps;
use gitrig::output::{OutputMode, StatusReport};
use gitrig::status::FileStatus;

use super::absolutize;

/// Render one file row for human output
fn render(status: &FileStatus) -> String {
    let tag = if status.untracked && !status.added {
        "??".purple()
    } else if status.added && status.untracked {
        " A".green()
    } else if status.deleted {
        " D".red()
    } else if status.added {
        "*M".yellow()
    } else {
        " M".yellow()
    };
    format!("{tag} {}", status.file)
}

/// Show status, optionally limited to selected paths
pub fn show(ops: &GitOps<'_>, cwd: &Path, paths: &[PathBuf], mode: OutputMode) -> anyhow::Result<()> {
    let (root, files) = if paths.is_empty() {
        let root = ops.repo_root(cwd)?;
        let files = ops.status(&root)?;
        (root, files)
    } else {
        ops.status_selected(&absolutize(cwd, paths))?
    };
    let report = StatusReport {
        root: root.display().to_string(),
        files,
    };

    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputMode::Human => {
            let commits = ops.commit_count(&root)?;
            if report.files.is_empty() {
                println!("{} ({commits} commit(s) on HEAD)", "Working tree clean".green());
                return Ok(());
            }
            let staged = GitOps::staged_of(&report.files).len();
            println!(
                "{} changed file(s), {} staged in {} ({commits} commit(s) on HEAD)",
                report.files.len(),
                staged,
                report.root.bold()
            );
            for status in &report.files {
                println!("  {}", render(status));
            }
        }
    }
    Ok(())
}
