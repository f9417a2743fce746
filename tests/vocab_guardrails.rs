//! Reserved words and punctuation are classified through `triangle_core::lang`, never by comparing
//! spellings inline. This test flags `== "<spelling>"` and `"<spelling>" =>` outside the registry
//! and outside tests. It is a line scan, so comment lines are skipped and nothing smarter is tried.

use std::fs;
use std::path::{Path, PathBuf};

use triangle_core::lang::{keywords, punctuation};

const REPORT_LIMIT: usize = 80;

struct Hit {
    file: PathBuf,
    line: usize,
    text: String,
}

#[test]
fn vocabulary_is_only_spelled_out_in_the_registry() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let needles = needles();

    let mut sources = Vec::new();
    for top in ["src", "crates"] {
        collect_rust_files(&root.join(top), &mut sources);
    }

    let hits: Vec<Hit> = sources
        .iter()
        .filter(|path| !is_exempt(&relative(&root, path)))
        .flat_map(|path| hits_in(path, &needles))
        .collect();

    if hits.is_empty() {
        return;
    }
    let report: Vec<String> = hits
        .iter()
        .take(REPORT_LIMIT)
        .map(|hit| format!("  {}:{}: {}", relative(&root, &hit.file), hit.line, hit.text))
        .collect();
    panic!(
        "{} line(s) compare against vocabulary spellings; use triangle_core::lang instead:\n{}",
        hits.len(),
        report.join("\n")
    );
}

/// `== "x"` and `"x" =>` for every reserved word and punctuation spelling.
fn needles() -> Vec<String> {
    keywords::KEYWORDS
        .iter()
        .map(|k| k.canonical)
        .chain(punctuation::PUNCTUATION.iter().map(|p| p.canonical))
        .flat_map(|s| [format!("== \"{s}\""), format!("\"{s}\" =>")])
        .collect()
}

fn collect_rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect_rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).to_string_lossy().replace('\\', "/")
}

fn is_exempt(rel: &str) -> bool {
    rel.starts_with("crates/triangle_core/src/lang/")
        || rel.starts_with("tests/")
        || rel.contains("/tests/")
        || rel.ends_with("tests.rs")
}

fn hits_in(path: &Path, needles: &[String]) -> Vec<Hit> {
    let Ok(contents) = fs::read_to_string(path) else {
        return Vec::new();
    };
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .filter(|(_, line)| needles.iter().any(|n| line.contains(n.as_str())))
        .map(|(idx, line)| Hit {
            file: path.to_path_buf(),
            line: idx + 1,
            text: line.trim().to_string(),
        })
        .collect()
}
