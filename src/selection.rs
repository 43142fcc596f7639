//! Path resolver - turns raw selected paths into a single-repository selection
//!
//! Raw selections arrive as whatever the caller's UI produced: files, whole
//! folders, overlapping mixes of both. Resolution classifies each path,
//! drops children subsumed by a selected parent, groups the survivors by
//! working directory, and pins everything to one repository root - or fails
//! before any write happens.
//!
//! Symlinks are followed during classification: a symlinked directory is a
//! directory. The traversal in [`walk_files`] does not follow directory
//! symlinks, which avoids cycles.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::runner::CommandRunner;

/// Transient classification of one raw selected path
///
/// Produced while resolving and discarded after consolidation.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Working directory this path contributes to
    pub cwd: PathBuf,
    /// The path itself is a directory
    pub is_dir: bool,
    /// The selected path
    pub file_path: PathBuf,
}

/// Selected paths grouped by working directory
///
/// Invariant: no entry's path is a strict prefix of another entry's path,
/// in any bucket - a selected parent subsumes its children.
pub type ConsolidatedSelection = BTreeMap<PathBuf, Vec<PathBuf>>;

/// A consolidated selection pinned to its single repository root
#[derive(Debug, Clone)]
pub struct ResolvedSelection {
    /// Paths grouped by working directory
    pub selection: ConsolidatedSelection,
    /// The one repository root every working directory resolved to
    pub root: PathBuf,
}

/// Normalize separators so prefix checks behave the same on every OS
fn normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Whether `child` lies strictly below `parent`
fn is_strict_descendant(child: &Path, parent: &Path) -> bool {
    let child = normalized(child);
    let parent = normalized(parent);
    child.len() > parent.len()
        && child.starts_with(&parent)
        && child.as_bytes().get(parent.len()) == Some(&b'/')
}

/// Classify raw paths into directory entries
///
/// Directories become their own working directory; files use their parent.
/// A path that no longer exists (a deleted file still listed in a status
/// view) classifies as a file through its parent.
fn classify(raw_paths: &[PathBuf]) -> Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::with_capacity(raw_paths.len());
    for path in raw_paths {
        let is_dir = match fs::metadata(path) {
            Ok(meta) => meta.is_dir(),
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };
        let cwd = if is_dir {
            path.clone()
        } else {
            path.parent().map_or_else(|| path.clone(), Path::to_path_buf)
        };
        entries.push(DirectoryEntry {
            cwd,
            is_dir,
            file_path: path.clone(),
        });
    }
    Ok(entries)
}

/// Drop entries that are strict descendants of a selected directory
fn consolidate(entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
    let dirs: Vec<PathBuf> = entries
        .iter()
        .filter(|e| e.is_dir)
        .map(|e| e.file_path.clone())
        .collect();

    entries
        .into_iter()
        .filter(|entry| {
            !dirs
                .iter()
                .any(|dir| is_strict_descendant(&entry.file_path, dir))
        })
        .collect()
}

/// Resolve raw selected paths into a single-repository selection
///
/// Fails with [`Error::MultiRoot`] when the selections span repositories;
/// that boundary is deliberate - operations never cross repositories
/// implicitly.
pub fn resolve(runner: &dyn CommandRunner, raw_paths: &[PathBuf]) -> Result<ResolvedSelection> {
    if raw_paths.is_empty() {
        return Err(Error::EmptySelection);
    }

    let entries = consolidate(classify(raw_paths)?);

    let mut selection: ConsolidatedSelection = BTreeMap::new();
    for entry in entries {
        selection.entry(entry.cwd).or_default().push(entry.file_path);
    }

    let mut roots: Vec<PathBuf> = Vec::new();
    for cwd in selection.keys() {
        let result = runner.run(cwd, &["rev-parse", "--show-toplevel"], None)?;
        let root = PathBuf::from(result.output.trim());
        if !roots.contains(&root) {
            roots.push(root);
        }
    }

    match roots.len() {
        1 => Ok(ResolvedSelection {
            selection,
            root: roots.remove(0),
        }),
        _ => Err(Error::MultiRoot { roots }),
    }
}

/// Flat list of all files under `path`
///
/// A pure function from path to file list; directory symlinks are not
/// followed.
pub fn walk_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|e| {
            e.into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk failed"))
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
