//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("wpblocks")
        .arg("parse")
        .write_stdin(r#"<p>intro</p><!-- wp:image {"id":5} /-->"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "text""#))
        .stdout(predicate::str::contains(r#""name": "image""#));
}

#[test]
fn test_parse_compact_json() {
    cargo_bin_cmd!("wpblocks")
        .args(["parse", "--compact"])
        .write_stdin("<!-- wp:quote --><p>Hi</p><!-- /wp:quote -->")
        .assert()
        .success()
        .stdout(
            r#"[{"type":"block","name":"quote","attributes":{},"innerMarkup":"<p>Hi</p>"}]
"#,
        );
}

#[test]
fn test_parse_summary() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("post.html");
    fs::write(
        &test_file,
        "<p>a</p><!-- wp:image /--><!-- wp:image /--><!-- wp:spacer /-->",
    )
    .unwrap();

    cargo_bin_cmd!("wpblocks")
        .args(["parse", "--format", "summary", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 block(s), 1 fragment(s)"))
        .stdout(predicate::str::contains("image   2"));
}

#[test]
fn test_parse_debug() {
    cargo_bin_cmd!("wpblocks")
        .args(["parse", "--format", "debug"])
        .write_stdin("<!-- wp:spacer /-->")
        .assert()
        .success()
        .stdout(predicate::str::contains("Block("))
        .stdout(predicate::str::contains("\"spacer\""));
}

#[test]
fn test_parse_reports_invalid_attributes() {
    cargo_bin_cmd!("wpblocks")
        .arg("parse")
        .write_stdin("<p>a</p>\n<!-- wp:list {bad json} /-->")
        .assert()
        .success()
        .stdout(predicate::str::contains("<!-- wp:list {bad json} /-->"))
        .stderr(predicate::str::contains("[invalid-attributes]"))
        .stderr(predicate::str::contains("<stdin>:2:1"));
}

#[test]
fn test_parse_check_fails_on_diagnostics() {
    cargo_bin_cmd!("wpblocks")
        .args(["parse", "--check"])
        .write_stdin("<!-- wp:list {bad json} /-->")
        .assert()
        .code(1);
}

#[test]
fn test_parse_check_passes_on_clean_input() {
    cargo_bin_cmd!("wpblocks")
        .args(["parse", "--check"])
        .write_stdin("<!-- wp:list /-->")
        .assert()
        .success();
}

#[test]
fn test_parse_with_discovered_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("post.html");
    fs::write(&test_file, "<!-- wp:a /--><!-- wp:b /--><!-- wp:c /-->").unwrap();
    fs::write(
        temp_dir.path().join(".wpblocks.toml"),
        "output = \"summary\"\n\n[limits]\nmax_markers = 2",
    )
    .unwrap();

    cargo_bin_cmd!("wpblocks")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 block(s), 1 fragment(s)"))
        .stderr(predicate::str::contains("[marker-limit]"));
}

#[test]
fn test_parse_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "pretty = false").unwrap();

    cargo_bin_cmd!("wpblocks")
        .args(["parse", "--config", config_file.to_str().unwrap()])
        .write_stdin("<p>x</p>")
        .assert()
        .success()
        .stdout("[{\"type\":\"text\",\"text\":\"<p>x</p>\"}]\n");
}

#[test]
fn test_parse_with_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "output = 42").unwrap();

    cargo_bin_cmd!("wpblocks")
        .args(["parse", "--config", config_file.to_str().unwrap()])
        .write_stdin("<p>x</p>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_parse_empty_input() {
    cargo_bin_cmd!("wpblocks")
        .args(["parse", "--compact"])
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout("[]\n");
}
