//! Integration tests for the vcon CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, temp_fixture};

/// vcon command isolated from the user's config file.
fn vcon(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vcon").expect("vcon binary should build");
    cmd.env("VCON_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("VCON_LOG");
    cmd
}

// ============================================================================
// consolify
// ============================================================================

#[test]
fn consolify_reads_stdin() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .arg("consolify")
        .write_stdin("abc\rdef\nnext line\n")
        .assert()
        .success()
        .stdout("def\nnext line\n");
}

#[test]
fn consolify_strips_ansi_by_default() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .arg("consolify")
        .write_stdin("\x1b[31mred\x1b[0m\rblue")
        .assert()
        .success()
        .stdout("blue");
}

#[test]
fn consolify_keep_ansi_leaves_sequences() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .args(["consolify", "--keep-ansi"])
        .write_stdin("a\x1b[0mb")
        .assert()
        .success()
        .stdout("a\x1b[0mb");
}

#[test]
fn consolify_never_reads_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[wrap\n").unwrap();

    vcon(&dir)
        .arg("consolify")
        .write_stdin("ok")
        .assert()
        .success()
        .stdout("ok");
}

#[test]
fn consolify_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .args(["consolify", "/nonexistent/output.log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// ============================================================================
// wrap
// ============================================================================

#[test]
fn wrap_file_with_width() {
    let dir = TempDir::new().unwrap();
    let output = vcon(&dir)
        .args(["wrap", "--width", "20"])
        .arg(fixtures_dir().join("notes.txt"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout, @r"
    Greedy wrapping
    packs as many words
    as fit onto each
    line before
    breaking.

    A blank line starts
    a new paragraph.
    ");
}

#[test]
fn wrap_hard_splits_long_words() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .args(["wrap", "--width", "5", "--hard"])
        .write_stdin("abcdefghijkl\n")
        .assert()
        .success()
        .stdout("abcde\nfghij\nkl\n");
}

#[test]
fn wrap_applies_indent() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .args(["wrap", "--width", "10", "--indent", "> "])
        .write_stdin("one two three four\n")
        .assert()
        .success()
        .stdout("> one two\n> three\n> four\n");
}

#[test]
fn wrap_indent_marks_blank_lines() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .args(["wrap", "--width", "20", "--indent", "> "])
        .write_stdin("a\n\nc\n")
        .assert()
        .success()
        .stdout("> a\n> \n> c\n");
}

#[test]
fn wrap_empty_input_prints_nothing() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .args(["wrap", "--width", "20"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn wrap_keep_lines_does_not_join() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .args(["wrap", "--width", "40", "--keep-lines"])
        .write_stdin("first\nsecond\n")
        .assert()
        .success()
        .stdout("first\nsecond\n");
}

#[test]
fn wrap_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[wrap]\nmax_line_length = 6\nhard_wrap = true\n",
    )
    .unwrap();

    vcon(&dir)
        .arg("wrap")
        .write_stdin("abcdefghij\n")
        .assert()
        .success()
        .stdout("abcdef\nghij\n");
}

#[test]
fn wrap_no_hard_overrides_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[wrap]\nmax_line_length = 6\nhard_wrap = true\n",
    )
    .unwrap();

    vcon(&dir)
        .args(["wrap", "--no-hard"])
        .write_stdin("abcdefghij\n")
        .assert()
        .success()
        .stdout("abcdefghij\n");
}

// ============================================================================
// replay
// ============================================================================

#[test]
fn replay_renders_final_state() {
    let dir = TempDir::new().unwrap();
    let (_cast_dir, cast) = temp_fixture("progress.cast");

    vcon(&dir)
        .arg("replay")
        .arg(&cast)
        .assert()
        .success()
        .stdout(
            "fetching dependencies\n\
             [##########] 100%\n\
             resolved 42 packages, the lockfile is up to date and no changes were needed\n",
        );
}

#[test]
fn replay_until_stops_early() {
    let dir = TempDir::new().unwrap();
    let (_cast_dir, cast) = temp_fixture("progress.cast");

    vcon(&dir)
        .arg("replay")
        .arg(&cast)
        .args(["--until", "0.6"])
        .assert()
        .success()
        .stdout("fetching dependencies\n[##        ] 20%");
}

#[test]
fn replay_width_wraps_console_lines() {
    let dir = TempDir::new().unwrap();
    let (_cast_dir, cast) = temp_fixture("progress.cast");

    vcon(&dir)
        .arg("replay")
        .arg(&cast)
        .args(["--width", "30"])
        .assert()
        .success()
        .stdout(
            "fetching dependencies\n\
             [##########] 100%\n\
             resolved 42 packages, the\n\
             lockfile is up to date and no\n\
             changes were needed\n",
        );
}

#[test]
fn replay_rejects_negative_until() {
    let dir = TempDir::new().unwrap();
    let (_cast_dir, cast) = temp_fixture("progress.cast");

    vcon(&dir)
        .arg("replay")
        .arg(&cast)
        .args(["--until=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--until"));
}

#[test]
fn replay_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .args(["replay", "/nonexistent/session.cast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open recording"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    let expected = dir.path().join("config.toml");
    vcon(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    vcon(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    vcon(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[wrap]"))
        .stdout(predicate::str::contains("strip_ansi = true"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    vcon(&dir).args(["config", "init"]).assert().success();
    vcon(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    vcon(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

// ============================================================================
// misc
// ============================================================================

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vcon"));
}

#[test]
fn no_subcommand_shows_usage() {
    let dir = TempDir::new().unwrap();
    vcon(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}
