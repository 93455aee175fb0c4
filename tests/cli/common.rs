//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("wpblocks")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wpblocks reads HTML"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("wpblocks")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("wpblocks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("wpblocks")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_parse_help() {
    cargo_bin_cmd!("wpblocks")
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse a document"));
}

#[test]
fn test_strip_help() {
    cargo_bin_cmd!("wpblocks")
        .args(["strip", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remove every block marker"));
}

#[test]
fn test_missing_file() {
    cargo_bin_cmd!("wpblocks")
        .args(["parse", "does-not-exist.html"])
        .assert()
        .failure();
}

#[test]
fn test_man_pages_generated_per_subcommand() {
    let man_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("target/man");
    for page in ["wpblocks.1", "wpblocks-parse.1", "wpblocks-strip.1"] {
        let content = std::fs::read_to_string(man_dir.join(page))
            .unwrap_or_else(|e| panic!("{page}: {e}"));
        assert!(content.contains("wpblocks"), "{page}");
    }

    let parse_page = std::fs::read_to_string(man_dir.join("wpblocks-parse.1")).unwrap();
    assert!(parse_page.contains("check"));
}
