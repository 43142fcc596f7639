//! Tests for the folder-reduction algorithm

use gitrig::reduce::{ROOT_MARKER, reduce};

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// =============================================================================
// Short circuits
// =============================================================================

#[test]
fn selecting_everything_collapses_to_the_root_marker() {
    let all = strs(&["a.txt", "dir/b.txt", "dir/c.txt"]);
    assert_eq!(reduce(&all, &all), vec![ROOT_MARKER.to_string()]);
}

#[test]
fn empty_selection_reduces_to_nothing() {
    let all = strs(&["a.txt"]);
    assert!(reduce(&[], &all).is_empty());
}

// =============================================================================
// Folder folding
// =============================================================================

#[test]
fn fully_selected_folder_becomes_a_folder_argument() {
    let all = strs(&["a.txt", "dir/b.txt", "dir/c.txt", "other.txt"]);
    let selected = strs(&["a.txt", "dir/b.txt", "dir/c.txt"]);
    assert_eq!(reduce(&selected, &all), strs(&["a.txt", "dir/"]));
}

#[test]
fn partially_selected_folder_keeps_explicit_files() {
    let all = strs(&["a.txt", "dir/b.txt", "dir/c.txt", "other.txt"]);
    let selected = strs(&["a.txt", "dir/b.txt"]);
    assert_eq!(reduce(&selected, &all), strs(&["a.txt", "dir/b.txt"]));
}

#[test]
fn nested_candidate_folders_keep_only_the_outermost() {
    let all = strs(&["top/mid/a.txt", "top/mid/deep/b.txt", "elsewhere.txt"]);
    let selected = strs(&["top/mid/a.txt", "top/mid/deep/b.txt"]);
    // top/mid, top/mid/deep, and top are all fully selected; only the
    // outermost survives
    assert_eq!(reduce(&selected, &all), strs(&["top/"]));
}

#[test]
fn sibling_folders_fold_independently() {
    let all = strs(&["x/a.txt", "x/b.txt", "y/c.txt", "y/d.txt", "z/e.txt"]);
    let selected = strs(&["x/a.txt", "x/b.txt", "y/c.txt", "y/d.txt"]);
    assert_eq!(reduce(&selected, &all), strs(&["x/", "y/"]));
}

// =============================================================================
// Stability properties
// =============================================================================

#[test]
fn result_is_stable_under_input_reordering() {
    let all = strs(&["a.txt", "dir/b.txt", "dir/c.txt", "other.txt"]);
    let forward = strs(&["a.txt", "dir/b.txt", "dir/c.txt"]);
    let backward = strs(&["dir/c.txt", "dir/b.txt", "a.txt"]);
    assert_eq!(reduce(&forward, &all), reduce(&backward, &all));
}

#[test]
fn reduce_is_idempotent() {
    let all = strs(&["a.txt", "dir/b.txt", "dir/c.txt", "other.txt"]);
    let selected = strs(&["a.txt", "dir/b.txt", "dir/c.txt"]);
    let once = reduce(&selected, &all);
    let twice = reduce(&once, &all);
    assert_eq!(once, twice);
}

#[test]
fn reduce_of_the_root_marker_is_idempotent() {
    let all = strs(&["a.txt", "dir/b.txt"]);
    let once = reduce(&all, &all);
    assert_eq!(reduce(&once, &all), once);
}

#[test]
fn separators_are_normalized() {
    let all = strs(&["dir/b.txt", "dir/c.txt", "a.txt"]);
    let selected = strs(&["dir\\b.txt", "dir\\c.txt"]);
    assert_eq!(reduce(&selected, &all), strs(&["dir/"]));
}

#[test]
fn file_outside_the_change_set_never_folds_its_folder() {
    let all = strs(&["dir/changed.txt"]);
    let selected = strs(&["dir/unchanged.txt"]);
    // Folding to "dir/" would cover dir/changed.txt, which was never selected
    assert_eq!(reduce(&selected, &all), strs(&["dir/unchanged.txt"]));
}

#[test]
fn selection_outside_the_change_set_stays_explicit() {
    let all = strs(&["dir/b.txt"]);
    let selected = strs(&["dir/b.txt", "unchanged.txt"]);
    // "unchanged.txt" is not in the change set, so the sets are not equal
    // and the extra file is passed through untouched
    assert_eq!(reduce(&selected, &all), strs(&["dir/", "unchanged.txt"]));
}
