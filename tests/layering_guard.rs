//! Layering guardrails for the workspace crates.
//!
//! - `newb_core` holds the vocabulary tables only and has no dependencies at all.
//! - `newb_syntax` is a library front end: it may log through `tracing` but must not pull in the CLI or
//!   subscriber stack (`clap`, `tracing-subscriber`), which belong to the `newb` binary crate.
//! - `newb` reaches the vocabulary only through `newb_syntax`.

/// `(name, spec)` pairs listed in the `table` section of a manifest.
fn dependency_table(manifest: &str, table: &str) -> Vec<(String, String)> {
    let mut in_table = false;
    let mut deps = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            in_table = line == table;
            continue;
        }
        if !in_table || line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((name, spec)) = line.split_once('=') {
            deps.push((name.trim().to_string(), spec.trim().to_string()));
        }
    }
    deps
}

/// Dependency names listed in the `[dependencies]` table of a manifest.
fn main_dependencies(manifest: &str) -> Vec<String> {
    dependency_table(manifest, "[dependencies]")
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}

#[test]
fn core_has_no_dependencies() {
    let deps = main_dependencies(include_str!("../crates/newb_core/Cargo.toml"));
    assert!(deps.is_empty(), "newb_core must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_does_not_depend_on_cli_stack() {
    let deps = main_dependencies(include_str!("../crates/newb_syntax/Cargo.toml"));
    for forbidden in ["clap", "tracing-subscriber", "newb"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in newb_syntax [dependencies]"
        );
    }
    assert!(deps.iter().any(|d| d == "newb_core"));
}

#[test]
fn root_reaches_vocabulary_through_syntax() {
    let deps = main_dependencies(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|d| d == "newb_syntax"));
    assert!(
        !deps.iter().any(|d| d == "newb_core"),
        "`newb` must not depend on newb_core directly"
    );
}

#[test]
fn snapshot_tooling_uses_inline_snapshots_only() {
    let dev = dependency_table(include_str!("../Cargo.toml"), "[dev-dependencies]");
    let (_, insta) = dev
        .iter()
        .find(|(name, _)| name == "insta")
        .expect("insta is a dev-dependency");
    assert!(!insta.contains("glob"), "no test uses `insta::glob!`, found {insta}");
}
