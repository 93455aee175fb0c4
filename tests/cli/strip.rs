//! Strip subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_strip_stdin() {
    cargo_bin_cmd!("wpblocks")
        .arg("strip")
        .write_stdin("<!-- wp:quote -->\n<p>Hi</p>\n<!-- /wp:quote -->\n<!-- wp:spacer /-->\n")
        .assert()
        .success()
        .stdout("<p>Hi</p>\n");
}

#[test]
fn test_strip_file_keeps_other_comments() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("post.html");
    fs::write(
        &test_file,
        "<!-- author note --><!-- wp:paragraph --><p>a</p><!-- /wp:paragraph -->",
    )
    .unwrap();

    cargo_bin_cmd!("wpblocks")
        .args(["strip", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<!-- author note --><p>a</p>\n");
}
