//! Hygiene: source-scan budgets for the editor core.
//!
//! The core crate must stay panic-free, must not swallow errors, and must not
//! reach for browser APIs (the front-end owns those). Each pattern has a budget
//! that should only ever go down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics on None/Err" },
    Budget { pattern: ".expect(", max: 0, why: "panics on None/Err" },
    Budget { pattern: "panic!(", max: 0, why: "crashes the editor" },
    Budget { pattern: "unreachable!(", max: 0, why: "crashes the editor" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished code path" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished code path" },
    Budget { pattern: "let _ =", max: 0, why: "discards a result unread" },
    Budget { pattern: ".ok()", max: 0, why: "discards an error unread" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" },
    Budget { pattern: "println!(", max: 0, why: "use the log facade" },
    Budget { pattern: "eprintln!(", max: 0, why: "use the log facade" },
    Budget { pattern: "web_sys", max: 0, why: "core must stay browser-free" },
    Budget { pattern: "wasm_bindgen", max: 0, why: "core must stay browser-free" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, skipping `*_test.rs`.
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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the canvas crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` budget exceeded ({}): found {count}, max {}\n{detail}",
                budget.pattern, budget.why, budget.max
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
