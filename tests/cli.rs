//! CLI integration tests for basexx
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn basexx() -> Command {
    let mut cmd = Command::cargo_bin("basexx").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    basexx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert numbers between bases"));
}

#[test]
fn test_version() {
    basexx()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("basexx"));
}

#[test]
fn test_list_bases() {
    basexx()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("a36"))
        .stdout(predicate::str::contains("base-62"))
        .stdout(predicate::str::contains("(raw bytes)"));
}

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn test_positional_inputs() {
    basexx()
        .args(["--from", "a10", "--to", "a20", "12345", "0"])
        .assert()
        .success()
        .stdout("1ah5\n0\n");
}

#[test]
fn test_stdin_lines() {
    basexx()
        .args(["--from", "a20", "--to", "a10"])
        .write_stdin("1ah5\n1AH5\r\n10\n")
        .assert()
        .success()
        .stdout("12345\n12345\n20\n");
}

#[test]
fn test_table_bases() {
    basexx()
        .args(["-f", "dec", "-t", "50", "42"])
        .assert()
        .success()
        .stdout("R\n");

    basexx()
        .args(["-f", "dec", "-t", "30", "42"])
        .assert()
        .success()
        .stdout("1d\n");
}

#[test]
fn test_binary_output_is_raw() {
    basexx()
        .args(["--from", "hex", "--to", "bin", "414243"])
        .assert()
        .success()
        .stdout("ABC\n");
}

#[test]
fn test_binary_input() {
    basexx()
        .args(["--from", "bin", "--to", "hex"])
        .write_stdin("ABC\n")
        .assert()
        .success()
        .stdout("414243\n");
}

#[test]
fn test_roundtrip_base94() {
    let encoded = basexx()
        .args(["--from", "dec", "--to", "94", "18446744073709551615"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    basexx()
        .args(["--from", "94", "--to", "dec"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("18446744073709551615\n");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_base_suggests() {
    basexx()
        .args(["--from", "hx", "--to", "dec", "ff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base 'hx' not found"))
        .stderr(predicate::str::contains("did you mean 'hex'?"));
}

#[test]
fn test_invalid_digit_fails() {
    basexx()
        .args(["--from", "a36", "--to", "dec", "ab!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot convert 'ab!'"))
        .stderr(predicate::str::contains("'!' is not a base-36 digit"));
}

#[test]
fn test_missing_base_name() {
    basexx()
        .args(["--to", "dec", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--from"));
}

#[test]
fn test_local_config_override() {
    let dir = std::env::temp_dir().join(format!("basexx-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("bases.toml"),
        r#"
[settings]
default_from = "dec"

[bases.dna]
kind = "table"
digits = "ACGT"
"#,
    )
    .unwrap();

    basexx()
        .current_dir(&dir)
        .args(["--to", "dna", "27"])
        .assert()
        .success()
        .stdout("CGT\n");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_broken_local_config_is_skipped() {
    let dir = std::env::temp_dir().join(format!("basexx-cli-broken-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("bases.toml"), "[bases.x\nkind=").unwrap();

    basexx()
        .current_dir(&dir)
        .env_remove("RUST_LOG")
        .args(["--from", "dec", "--to", "62", "12345"])
        .assert()
        .success()
        .stdout("3d7\n")
        .stderr(predicate::str::contains("failed to load config"));

    std::fs::remove_dir_all(&dir).unwrap();
}
