//! Operation façade - the user-visible verbs
//!
//! Each verb is a strictly ordered sequence: policy checks (zero side
//! effects), path resolution, lock check, git command(s), fresh state.
//! Nothing below this layer swallows an error; presentation is the
//! caller's job.
//!
//! - [`commit`](GitOps::commit) / [`discard`](GitOps::discard) - path-scoped
//!   worktree operations
//! - [`branches`](GitOps::branches) and friends - branch management
//! - [`stash_save`](GitOps::stash_save) and friends - stash management
//! - [`fetch`](GitOps::fetch) / [`pull`](GitOps::pull) / [`push`](GitOps::push)

mod branches;
mod commit;
mod discard;
mod stash;
mod sync;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::interact::{Progress, Prompt};
use crate::runner::CommandRunner;
use crate::selection::{self, ResolvedSelection};
use crate::status::{self, FileStatus};

/// High-level git verbs over a command runner and interaction ports
pub struct GitOps<'a> {
    config: &'a EngineConfig,
    runner: &'a dyn CommandRunner,
    prompt: &'a dyn Prompt,
    progress: &'a dyn Progress,
}

impl fmt::Debug for GitOps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitOps").field("config", &self.config).finish_non_exhaustive()
    }
}

impl<'a> GitOps<'a> {
    /// Wire up the façade
    ///
    /// Configuration is passed explicitly; the façade never reads settings
    /// ambiently.
    #[must_use]
    pub fn new(
        config: &'a EngineConfig,
        runner: &'a dyn CommandRunner,
        prompt: &'a dyn Prompt,
        progress: &'a dyn Progress,
    ) -> Self {
        Self {
            config,
            runner,
            prompt,
            progress,
        }
    }

    /// Decoded working-tree status for the repository containing `cwd`
    pub fn status(&self, cwd: &Path) -> Result<Vec<FileStatus>> {
        let result = self.runner.run(cwd, &["status", "--porcelain"], None)?;
        status::decode(&result.output)
    }

    /// Working-tree status limited to the selected paths
    ///
    /// Resolves the selection to one repository, then keeps only the
    /// changed files the selection covers. Returns the resolved root with
    /// the filtered listing.
    pub fn status_selected(&self, paths: &[PathBuf]) -> Result<(PathBuf, Vec<FileStatus>)> {
        let resolved = selection::resolve(self.runner, paths)?;
        let changed = self.status(&resolved.root)?;
        let keep = Self::selected_changed(&resolved, &changed);
        let files = changed.into_iter().filter(|s| keep.contains(&s.file)).collect();
        Ok((resolved.root, files))
    }

    /// The repository root containing `cwd`
    pub fn repo_root(&self, cwd: &Path) -> Result<PathBuf> {
        let result = self.runner.run(cwd, &["rev-parse", "--show-toplevel"], None)?;
        Ok(PathBuf::from(result.output.trim()))
    }

    /// Number of commits reachable from HEAD
    ///
    /// The count query itself errors in an empty repository, so a failure
    /// falls back to checking whether HEAD exists at all: no HEAD means
    /// zero commits, anything else propagates the original failure.
    pub fn commit_count(&self, cwd: &Path) -> Result<usize> {
        let counted = self.runner.try_run(cwd, &["rev-list", "--count", "HEAD"], None)?;
        if counted.ok {
            return counted
                .output
                .trim()
                .parse()
                .map_err(|_| Error::Process {
                    code: 0,
                    output: counted.output,
                });
        }

        let head = self.runner.try_run(cwd, &["rev-parse", "--verify", "HEAD"], None)?;
        if head.ok {
            Err(Error::Process {
                code: counted.code,
                output: counted.output,
            })
        } else {
            Ok(0)
        }
    }

    /// Selected files as repo-relative strings, limited to changed files
    ///
    /// A selected directory contributes every changed file beneath it; a
    /// selected file contributes itself iff it appears in the change set.
    fn selected_changed(resolved: &ResolvedSelection, changed: &[FileStatus]) -> Vec<String> {
        let mut out = Vec::new();
        for files in resolved.selection.values() {
            for path in files {
                let Ok(rel) = path.strip_prefix(&resolved.root) else {
                    continue;
                };
                let rel = rel.to_string_lossy().replace('\\', "/");
                if rel.is_empty() {
                    // The root itself was selected
                    out.extend(changed.iter().map(|s| s.file.clone()));
                    continue;
                }
                let prefix = format!("{rel}/");
                for status in changed {
                    if status.file == rel || status.file.starts_with(&prefix) {
                        out.push(status.file.clone());
                    }
                }
            }
        }
        out.sort();
        out.dedup();
        out
    }
}
