//! Status decoder - turns `git status --porcelain` lines into typed records
//!
//! The two-character code space is a fixed enumeration. Unknown codes are a
//! hard error, never skipped: an unrecognized status could hide an unsafe
//! destructive action behind a later verb.

use serde::Serialize;

use crate::error::{Error, Result};

/// Decoded state of one file in the working tree
///
/// `added` means the file has a staged/index-side change; `untracked` means
/// it has no tracked baseline or is a pending add. The two are not mutually
/// exclusive: a staged add of a new file is both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStatus {
    /// Path as reported by git, relative to the repository root
    pub file: String,
    /// Has a staged (index-side) change
    pub added: bool,
    /// No tracked baseline, or a pending add
    pub untracked: bool,
    /// Deleted in the index or the working tree
    pub deleted: bool,
    /// Content modified
    pub changed: bool,
}

impl FileStatus {
    const fn flags(file: String, added: bool, untracked: bool, deleted: bool, changed: bool) -> Self {
        Self {
            file,
            added,
            untracked,
            deleted,
            changed,
        }
    }
}

/// Decode one two-character porcelain code for `file`
///
/// The enumeration collapses git's staged/unstaged/conflict permutations
/// into the four-flag model.
pub fn decode_line(code: &str, file: &str) -> Result<FileStatus> {
    let file = file.to_string();
    match code {
        // modified in index, or modified on both sides
        "M " | "MM" | "UU" => Ok(FileStatus::flags(file, true, false, false, true)),
        // modified in the working tree only
        " M" => Ok(FileStatus::flags(file, false, false, false, true)),
        // deleted in index, or deleted on both sides
        "D " | "DD" => Ok(FileStatus::flags(file, true, false, true, false)),
        // deleted in the working tree only
        " D" => Ok(FileStatus::flags(file, false, false, true, false)),
        // added, renamed, and conflict-add variants
        "A " | "AM" | "AD" | "R " | "RM" | "AA" | "AU" | "UA" => {
            Ok(FileStatus::flags(file, true, true, false, false))
        }
        // untracked
        "??" => Ok(FileStatus::flags(file, false, true, false, false)),
        _ => Err(Error::UnknownStatusCode {
            code: code.to_string(),
            file,
        }),
    }
}

/// Decode whole `git status --porcelain` output
///
/// Empty output decodes to an empty list (no changes). A parse failure on
/// any single line aborts the whole decode; acting on a partially
/// understood status is worse than failing.
pub fn decode(output: &str) -> Result<Vec<FileStatus>> {
    let output = output.trim_end();
    if output.is_empty() {
        return Ok(Vec::new());
    }

    let mut statuses = Vec::new();
    for line in output.lines() {
        // "XY path" - two code chars, one space separator, then the path.
        // The separator check also keeps multibyte bytes at index 2 from
        // being sliced mid-character.
        if line.len() < 4 || !line.is_char_boundary(2) || line.as_bytes()[2] != b' ' {
            return Err(Error::MalformedStatusLine(line.to_string()));
        }
        statuses.push(decode_line(&line[..2], &line[3..])?);
    }
    Ok(statuses)
}
