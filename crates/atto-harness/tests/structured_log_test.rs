//! Integration test: structured JSONL log
//!
//! Validates that:
//! 1. A run writes one `case_finished` record per case and one `run_finished`.
//! 2. Every record passes schema validation.
//! 3. Trace ids are sequential within a run.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use atto_core::{DiagnosticSink, TestContext};
use atto_harness::structured_log::{LogEmitter, LogLevel, Outcome, validate_log_file};
use atto_harness::suites::example;
use atto_harness::{RunReport, TestRunner};

fn unique_tmp_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after UNIX_EPOCH")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}-{}-{nanos}.jsonl", std::process::id()))
}

#[test]
fn run_log_validates_and_summarizes() {
    let suite = example::suite();
    let mut ctx = TestContext::new().with_sink(DiagnosticSink::Discard);
    let results = TestRunner::new("example").run(&suite, &mut ctx);
    let report = RunReport::new("example", "example", "T0", results, ctx.state());

    let path = unique_tmp_path("atto-structured-log");
    let mut emitter = LogEmitter::to_file(&path, "example", "run-1").expect("create log");
    for case in &report.cases {
        emitter.emit_case(case).expect("emit case");
    }
    emitter
        .emit_run(&report.summary, report.summary.exit_code())
        .expect("emit run");
    emitter.flush().expect("flush log");
    drop(emitter);

    let (count, errors) = validate_log_file(&path).expect("read log");
    assert_eq!(count, suite.cases.len() + 1);
    assert!(errors.is_empty(), "schema errors: {errors:?}");

    let content = std::fs::read_to_string(&path).expect("read log");
    let entries: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();

    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry["trace_id"], format!("example::run-1::{:03}", i + 1));
        assert_eq!(entry["suite"], "example");
    }

    let first = &entries[0];
    assert_eq!(first["event"], "case_finished");
    assert_eq!(first["case"], "test_case_ints");
    assert_eq!(first["outcome"], serde_json::to_value(Outcome::Xfail).unwrap());
    assert_eq!(first["check"], "atto_assert");
    assert_eq!(first["details"]["expression"], "a == b");

    let last = entries.last().expect("run record");
    assert_eq!(last["event"], "run_finished");
    assert_eq!(last["exit_code"], 1);
    assert_eq!(last["level"], serde_json::to_value(LogLevel::Warn).unwrap());
    assert_eq!(last["assertions_failed"], 6);

    let _ = std::fs::remove_file(path);
}
