//! Integration test: `atto` binary
//!
//! Validates that:
//! 1. `atto selftest` exits 0 and prints the FAIL lines on stderr.
//! 2. `atto example` exits 1.
//! 3. `--report`, `--json` and `--log` write their artifacts.
//! 4. `ATTO_OUTPUT=stdout` moves diagnostics to stdout.
//! 5. `--strict-config` rejects a malformed tolerance.

use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use atto_harness::structured_log::validate_log_file;

fn unique_tmp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after UNIX_EPOCH")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}-{}-{nanos}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn atto() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_atto"));
    cmd.env_remove("ATTO_OUTPUT")
        .env_remove("ATTO_FLOAT_EQ_ABSTOL")
        .env_remove("ATTO_DOUBLE_EQ_ABSTOL");
    cmd
}

#[test]
fn selftest_exits_zero() {
    let output = atto().arg("selftest").output().expect("atto selftest should execute");
    assert!(output.status.success(), "status: {:?}", output.status);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FAIL | File: "));
    assert!(stderr.contains("| Test case: test_fail"));
    assert!(stderr.contains("REPORT | File: "));
}

#[test]
fn example_exits_one() {
    let output = atto()
        .args(["example", "--jobs", "2"])
        .output()
        .expect("atto example should execute");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("FAIL | ").count(), 6);
}

#[test]
fn artifacts_are_written() {
    let dir = unique_tmp_dir("atto-cli-artifacts");
    let md = dir.join("report.md");
    let json = dir.join("report.json");
    let log = dir.join("run.jsonl");

    let status = atto()
        .arg("selftest")
        .arg("--report")
        .arg(&md)
        .arg("--json")
        .arg(&json)
        .arg("--log")
        .arg(&log)
        .args(["--timestamp", "2026-01-01T00:00:00Z"])
        .status()
        .expect("atto selftest should execute");
    assert!(status.success());

    let markdown = std::fs::read_to_string(&md).expect("markdown report");
    assert!(markdown.contains("- Timestamp: 2026-01-01T00:00:00Z"));
    assert!(markdown.contains("| test_fail | 1 | XFAIL |"));

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).expect("json report"))
            .expect("valid json");
    assert_eq!(parsed["summary"]["unexpected_outcomes"], 0);

    let (count, errors) = validate_log_file(&log).expect("read log");
    assert!(count > 1);
    assert!(errors.is_empty(), "schema errors: {errors:?}");

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn output_stream_is_configurable() {
    let output = atto()
        .arg("example")
        .env("ATTO_OUTPUT", "stdout")
        .output()
        .expect("atto example should execute");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stdout.matches("FAIL | ").count(), 6);
    assert!(!stderr.contains("FAIL | "));
}

#[test]
fn strict_config_rejects_bad_tolerance() {
    let output = atto()
        .args(["selftest", "--strict-config"])
        .env("ATTO_FLOAT_EQ_ABSTOL", "wide")
        .output()
        .expect("atto selftest should execute");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ATTO_FLOAT_EQ_ABSTOL"), "{stderr}");
}

#[test]
fn list_names_cases() {
    let output = atto()
        .args(["list", "--suite", "example"])
        .output()
        .expect("atto list should execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("example (6 cases, parallel)"));
    assert!(stdout.contains("  test_case_forced_fail [should fail]"));
}
