//! Hygiene — enforces coding standards at test time.
//!
//! Scans the production source tree for antipatterns. Each pattern has a
//! budget (ideally zero). If you must add an occurrence, you have to fix an
//! existing one first — a budget never grows.

use std::fs;
use std::path::Path;

/// Pattern, exempt spellings, budget, and what exceeding it means. An
/// exempt spelling must contain the pattern exactly once; its occurrences
/// are subtracted from the count.
const BUDGETS: &[(&str, &[&str], usize, &str)] = &[
    // Panics — these crash hydration.
    (".unwrap()", &[], 0, "unwrap crashes the tab on None/Err"),
    (".expect(", &[], 0, "expect crashes the tab on None/Err"),
    ("panic!(", &[], 0, "explicit panic in production code"),
    ("unreachable!(", &[], 0, "unreachable! is still a panic"),
    ("todo!(", &[], 0, "unfinished stub"),
    ("unimplemented!(", &[], 0, "unfinished stub"),
    // Silent loss — discards errors without inspecting. `resp.ok()` is the
    // gloo-net HTTP status accessor, not an error discard.
    ("let _ =", &[], 4, "browser-glue discards only (log init, SSR stubs)"),
    (".ok()", &["resp.ok()"], 3, "net::api degradation paths only"),
    // Structure.
    ("#[allow(dead_code)]", &[], 0, "delete it instead"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs`.
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
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut failures = Vec::new();
    for (pattern, exempt, budget, why) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .filter_map(|file| {
                let count = file
                    .content
                    .lines()
                    .map(|line| {
                        let raw = line.matches(pattern).count();
                        let exempted: usize =
                            exempt.iter().map(|ex| line.matches(ex).count()).sum();
                        raw.saturating_sub(exempted)
                    })
                    .sum::<usize>();
                (count > 0).then(|| (file.path.clone(), count))
            })
            .collect();
        let total: usize = hits.iter().map(|(_, count)| count).sum();
        if total > *budget {
            let detail = hits
                .iter()
                .map(|(path, count)| format!("  {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{pattern}` budget exceeded: found {total}, max {budget} ({why}).\n{detail}"
            ));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}
