//! Layering guardrails for the workspace crates.
//!
//! `triangle_core` is the vocabulary crate and must stay dependency-free. `triangle_syntax` may depend on
//! `triangle_core` but never on the root `triangle` crate. The root crate reaches the vocabulary only
//! through `triangle_syntax`; its own tests may use `triangle_core` directly.

/// Entry names of one table (`"[dependencies]"`, `"[dev-dependencies]"`) of a manifest.
fn table_entries(manifest: &str, table: &str) -> Vec<String> {
    let mut in_table = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            in_table = line == table;
            continue;
        }
        if !in_table || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

fn dependency_names(manifest: &str) -> Vec<String> {
    table_entries(manifest, "[dependencies]")
}

#[test]
fn core_has_no_dependencies() {
    let manifest = include_str!("../crates/triangle_core/Cargo.toml");
    assert!(
        dependency_names(manifest).is_empty(),
        "`triangle_core` must not gain [dependencies]; it is shared vocabulary"
    );
}

#[test]
fn syntax_does_not_depend_on_root_crate() {
    let manifest = include_str!("../crates/triangle_syntax/Cargo.toml");
    let names = dependency_names(manifest);
    assert!(names.iter().any(|n| n == "triangle_core"));
    assert!(
        !names.iter().any(|n| n == "triangle"),
        "`triangle_syntax` must not depend on the root `triangle` crate"
    );
}

#[test]
fn root_uses_vocabulary_crate_only_in_tests() {
    let manifest = include_str!("../Cargo.toml");
    assert!(
        !dependency_names(manifest).iter().any(|n| n == "triangle_core"),
        "the root crate reaches `triangle_core` through `triangle_syntax`"
    );
    assert!(table_entries(manifest, "[dev-dependencies]").iter().any(|n| n == "triangle_core"));
}
