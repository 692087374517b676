//! Hygiene: enforces coding standards at test time
//!
//! These tests scan `src/` for antipatterns. Each has a budget (ideally zero).
//! If you must add one, fix an existing one first; the budget never grows.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().replace('\\', "/");
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source<'a>(files: impl IntoIterator<Item = &'a SourceFile>, pattern: &str) -> Vec<(String, usize)> {
    files
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

fn assert_budget(pattern: &str, max: usize, why: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let hits = count_in_source(&files, pattern);
    let count = total(&hits);
    assert!(count <= max, "`{pattern}` budget exceeded ({why}): found {count}, max {max}.\n{}", format_hits(&hits));
}

// Panics: these abort the wasm instance.

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0, "panics");
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0, "panics");
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0, "panics");
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0, "panics");
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0, "stub");
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", 0, "stub");
}

// Silent loss: discards errors without inspecting.

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0, "discards a result");
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 0, "discards an error");
}

// Style / structure.

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0, "hides unused code");
}

/// The cores run under plain `cargo test`; only `host` and `render` may touch the DOM.
#[test]
fn cores_stay_browser_free() {
    let files = source_files();
    let cores: Vec<&SourceFile> = files
        .iter()
        .filter(|f| !f.path.contains("src/host/") && !f.path.ends_with("src/render.rs") && !f.path.ends_with("src/lib.rs"))
        .collect();
    assert!(!cores.is_empty());
    let hits = count_in_source(cores.iter().copied(), "web_sys");
    assert_eq!(total(&hits), 0, "core modules reference web_sys:\n{}", format_hits(&hits));
}
