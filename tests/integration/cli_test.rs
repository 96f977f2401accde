//! Integration tests for the pastefix binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixtures_dir;

/// pastefix with an isolated config file location.
fn pastefix(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pastefix").expect("binary should build");
    cmd.env("PASTEFIX_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("PASTEFIX_LOG");
    cmd
}

fn write_config(config_dir: &TempDir, content: &str) {
    std::fs::write(config_dir.path().join("config.toml"), content).unwrap();
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    pastefix(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fix"))
        .stdout(predicate::str::contains("paste"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    pastefix(&dir).assert().failure().code(2);
}

// ============================================================================
// fix
// ============================================================================

#[test]
fn fix_reads_stdin() {
    let dir = TempDir::new().unwrap();
    pastefix(&dir)
        .args(["fix", "--column", "4"])
        .write_stdin(">>> if x:\n...     y()\n")
        .assert()
        .success()
        .stdout("if x:\n        y()\n");
}

#[test]
fn fix_rejects_out_of_range_column() {
    let dir = TempDir::new().unwrap();
    pastefix(&dir)
        .args(["fix", "--column", "18446744073709551615"])
        .write_stdin(">>> if x:\n...     y()\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--column"));
}

#[test]
fn fix_at_largest_column_succeeds() {
    let dir = TempDir::new().unwrap();
    let column = pastefix::fixer::context::MAX_COLUMN.to_string();
    let expected = format!("x = 1\n{}y = 2\n", " ".repeat(pastefix::fixer::context::MAX_COLUMN));
    pastefix(&dir)
        .args(["fix", "--column", &column])
        .write_stdin(">>> x = 1\n>>> y = 2\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn fix_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = fixtures_dir().join("numbered_session.txt");
    pastefix(&dir)
        .arg("fix")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("def total(values):\n    result = 0\n"))
        .stdout(predicate::str::contains("some_really_long_factor_name_that_wrapped"));
}

#[test]
fn fix_echoes_text_with_nothing_to_fix() {
    let dir = TempDir::new().unwrap();
    pastefix(&dir)
        .arg("fix")
        .write_stdin(">>> x = 1\n")
        .assert()
        .success()
        .stdout(">>> x = 1\n");
}

#[test]
fn fix_uses_tab_size_from_config() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[indent]\ntab_size = 2\n");
    pastefix(&dir)
        .arg("fix")
        .write_stdin("if x:\ny()\n")
        .assert()
        .success()
        .stdout("if x:\n  y()\n");
}

#[test]
fn fix_flags_override_config() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[indent]\ntab_size = 2\n");
    pastefix(&dir)
        .args(["fix", "--tabs"])
        .write_stdin("if x:\ny()\n")
        .assert()
        .success()
        .stdout("if x:\n\ty()\n");
}

#[test]
fn fix_missing_file_exits_1() {
    let dir = TempDir::new().unwrap();
    pastefix(&dir)
        .args(["fix", "/no/such/dir/input.py"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("input.py"));
}

#[test]
fn invalid_config_is_reported_with_path() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[indent\n");
    pastefix(&dir)
        .arg("fix")
        .write_stdin("a\nb\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_honors_environment() {
    let dir = TempDir::new().unwrap();
    let expected = dir.path().join("config.toml");
    pastefix(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().to_string()));
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    pastefix(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("insert_spaces = true"))
        .stdout(predicate::str::contains("tab_size = 4"));
}

#[test]
fn config_show_reflects_file() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[paste]\ncommand = \"xdotool key ctrl+v\"\n");
    pastefix(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("command = \"xdotool key ctrl+v\""));
}

// ============================================================================
// paste
// ============================================================================

#[test]
#[cfg(any(target_os = "linux", target_os = "macos"))]
fn paste_without_clipboard_tools_fails_helpfully() {
    let dir = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();
    pastefix(&dir)
        .args(["paste", "--no-paste"])
        .env("PATH", empty_path.path())
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No clipboard tool available"));
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    pastefix(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pastefix"));
}
