//! Folder reduction - folds fully-selected folders into folder arguments
//!
//! When a user has effectively selected "everything under a folder", the
//! folder itself goes to git instead of an enormous file list. That keeps
//! argument vectors bounded and stays correct for files that appear under
//! the folder after the selection was made.
//!
//! Folder arguments carry a trailing `/`; a selection covering the whole
//! change set collapses to [`ROOT_MARKER`]. The function is idempotent:
//! feeding its own output back in (against the same change set) yields the
//! same result, because folder arguments expand against the change set
//! before counting.

use std::collections::{BTreeMap, BTreeSet};

/// Argument emitted when the selection covers the entire change set
pub const ROOT_MARKER: &str = ".";

/// Normalize separators and strip a leading `./`
fn normalize(path: &str) -> String {
    let path = path.replace('\\', "/");
    path.strip_prefix("./").map_or(path.clone(), str::to_string)
}

/// Every ancestor folder of `file`: `a/b/c.txt` → `a`, `a/b`
fn ancestors(file: &str) -> Vec<String> {
    file.char_indices()
        .filter(|&(idx, ch)| ch == '/' && idx > 0)
        .map(|(idx, _)| file[..idx].to_string())
        .collect()
}

/// Expand a selection entry against the full change set
///
/// Folder arguments (trailing `/`) and the root marker contribute every
/// changed file they cover; plain files contribute themselves.
fn expand_into(entry: &str, all: &BTreeSet<String>, out: &mut BTreeSet<String>) {
    let entry = normalize(entry);
    if entry == ROOT_MARKER {
        out.extend(all.iter().cloned());
    } else if let Some(folder) = entry.strip_suffix('/') {
        let prefix = format!("{folder}/");
        out.extend(all.iter().filter(|f| f.starts_with(&prefix)).cloned());
    } else {
        out.insert(entry);
    }
}

/// Reduce selected files to the shortest equivalent path/folder arguments
///
/// A folder is folded iff every changed file under it is selected; nested
/// folded folders collapse into the outermost one. Output is sorted, so the
/// result is stable regardless of input ordering.
#[must_use]
pub fn reduce(selected: &[String], all_changed: &[String]) -> Vec<String> {
    let all: BTreeSet<String> = all_changed.iter().map(|f| normalize(f)).collect();

    let mut sel: BTreeSet<String> = BTreeSet::new();
    for entry in selected {
        expand_into(entry, &all, &mut sel);
    }

    if sel.is_empty() {
        return Vec::new();
    }
    if sel == all {
        return vec![ROOT_MARKER.to_string()];
    }

    let mut selected_count: BTreeMap<String, usize> = BTreeMap::new();
    for file in &sel {
        // A file outside the change set passes through explicitly below;
        // it must not make its folder look fully selected
        if !all.contains(file) {
            continue;
        }
        for folder in ancestors(file) {
            *selected_count.entry(folder).or_insert(0) += 1;
        }
    }
    let mut total_count: BTreeMap<String, usize> = BTreeMap::new();
    for file in &all {
        for folder in ancestors(file) {
            *total_count.entry(folder).or_insert(0) += 1;
        }
    }

    // A candidate folder has every changed file under it selected
    let candidates: Vec<String> = selected_count
        .iter()
        .filter(|(folder, count)| total_count.get(*folder) == Some(count))
        .map(|(folder, _)| folder.clone())
        .collect();

    // Keep only outermost candidates; nested folder arguments are redundant
    let outermost: Vec<String> = candidates
        .iter()
        .filter(|folder| {
            !candidates
                .iter()
                .any(|other| *other != **folder && folder.starts_with(&format!("{other}/")))
        })
        .cloned()
        .collect();

    let mut out: Vec<String> = sel
        .iter()
        .filter(|file| {
            !outermost
                .iter()
                .any(|folder| file.starts_with(&format!("{folder}/")))
        })
        .cloned()
        .collect();
    out.extend(outermost.into_iter().map(|folder| format!("{folder}/")));
    out.sort();
    out
}
