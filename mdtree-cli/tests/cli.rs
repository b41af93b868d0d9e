//! End-to-end tests of the mdtree binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn mdtree() -> Command {
    let mut cmd = Command::cargo_bin("mdtree").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn lists_formats() {
    mdtree()
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("html"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("treeviz"));
}

#[test]
fn writes_page_and_stylesheet() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let html = dir.path().join("page.html");
    let css = dir.path().join("page.css");
    fs::write(&input, "# Hi\n\nSome *text*.\n").unwrap();

    mdtree()
        .arg(&input)
        .arg("-o")
        .arg(&html)
        .arg("-s")
        .arg(&css)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let page = fs::read_to_string(&html).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<h1 class=\"Bold FontSize1\">Hi</h1>"));
    assert!(page.contains("<span class=\"Italic\">text</span>"));
    assert!(page.contains(&format!("href=\"{}\"", css.display())));

    let styles = fs::read_to_string(&css).unwrap();
    assert!(styles.starts_with("body {"));
    assert!(styles.contains(".FontSize1 {"));
    assert!(styles.contains(".Italic {"));
}

#[test]
fn other_formats_print_to_stdout() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "- a\n- b\n").unwrap();

    mdtree()
        .current_dir(dir.path())
        .arg(&input)
        .args(["--format", "treeviz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("☰ UnorderedList"))
        .stdout(predicate::str::contains("◦ b"));

    assert!(!dir.path().join("output.html").exists());
}

#[test]
fn print_tree_accompanies_the_page() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "hello\n").unwrap();

    mdtree()
        .current_dir(dir.path())
        .arg(&input)
        .arg("--print-tree")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("⧉ Document"));

    assert!(dir.path().join("output.html").exists());
    assert!(dir.path().join("styles.css").exists());
}

#[test]
fn config_file_sets_output_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let config = dir.path().join("mdtree.toml");
    fs::write(&input, "hello\n").unwrap();
    fs::write(&config, "[output]\nhtml = \"from-config.html\"\n").unwrap();

    mdtree()
        .current_dir(dir.path())
        .arg(&input)
        .arg("-c")
        .arg(&config)
        .assert()
        .success();

    assert!(dir.path().join("from-config.html").exists());
}

#[test]
fn warnings_are_logged_at_verbosity_two() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "*foo\n").unwrap();

    mdtree()
        .current_dir(dir.path())
        .arg(&input)
        .args(["-v", "2", "-f", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unclosed '*' emphasis"));
}

#[test]
fn warnings_are_silent_by_default() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "*foo\n").unwrap();

    mdtree()
        .current_dir(dir.path())
        .arg(&input)
        .args(["-f", "json"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn log_file_receives_warnings() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let log = dir.path().join("mdtree.log");
    let config = dir.path().join("mdtree.toml");
    fs::write(&input, "*foo\n").unwrap();
    fs::write(
        &config,
        format!("[logging]\nverbosity = 2\nfile = \"{}\"\n", log.display()),
    )
    .unwrap();

    mdtree()
        .current_dir(dir.path())
        .arg(&input)
        .arg("-c")
        .arg(&config)
        .args(["-f", "json"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains("Unclosed '*' emphasis"));
    assert!(!logged.contains('\u{1b}'));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    mdtree()
        .current_dir(dir.path())
        .arg(dir.path().join("absent.md"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn unknown_format_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "hello\n").unwrap();

    mdtree()
        .current_dir(dir.path())
        .arg(&input)
        .args(["-f", "docx"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown format 'docx'"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "hello\n").unwrap();

    mdtree()
        .current_dir(dir.path())
        .arg(&input)
        .args(["-c", "nope.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn out_of_range_verbosity_is_rejected() {
    mdtree().args(["doc.md", "-v", "9"]).assert().failure();
}
