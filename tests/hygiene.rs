//! Hygiene — scans production sources for panics and silently dropped errors.
//!
//! Each pattern has a budget of zero. Test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

const BANNED: [(&str, &str); 9] = [
    (".unwrap()", "unwrap"),
    (".expect(", "expect"),
    ("panic!(", "panic"),
    ("unreachable!(", "unreachable"),
    ("todo!(", "todo"),
    ("unimplemented!(", "unimplemented"),
    ("let _ =", "silent discard"),
    (".ok()", "silent discard via .ok()"),
    ("#[allow(dead_code)]", "allow(dead_code)"),
];

struct SourceFile {
    path: String,
    content: String,
}

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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("controller.rs")));
}

#[test]
fn no_banned_patterns() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, label) in BANNED {
        for (path, count) in hits(&files, pattern) {
            report.push(format!("  {label}: {path}: {count}"));
        }
    }
    assert!(report.is_empty(), "banned patterns in production code:\n{}", report.join("\n"));
}
