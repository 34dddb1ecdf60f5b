//! Structured JSONL logging for test runs.
//!
//! Provides:
//! - [`LogEntry`]: one JSONL record with required + optional fields.
//! - [`LogEmitter`]: writes records to a file or any writer, numbering trace ids.
//! - [`validate_log_line`]: validates a single JSONL line against the schema.
//! - [`validate_log_file`]: validates an entire JSONL file.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::report::RunSummary;
use crate::runner::CaseResult;

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Verdict of a test case relative to its `should_fail` marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    /// Failed, as required.
    Xfail,
    /// Passed although it was required to fail.
    Xpass,
}

impl Outcome {
    #[must_use]
    pub fn of(result: &CaseResult) -> Self {
        match (result.passed, result.expected_failure) {
            (true, false) => Self::Pass,
            (false, false) => Self::Fail,
            (false, true) => Self::Xfail,
            (true, true) => Self::Xpass,
        }
    }
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    // Required
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,

    // Optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    /// Source file of the failing assertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Macro name of the failing assertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertions_checked: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertions_failed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create a new log entry with required fields only.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            trace_id: trace_id.into(),
            level,
            event: event.into(),
            suite: None,
            case: None,
            outcome: None,
            file: None,
            line: None,
            check: None,
            assertions_checked: None,
            assertions_failed: None,
            exit_code: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_suite(mut self, suite: impl Into<String>) -> Self {
        self.suite = Some(suite.into());
        self
    }

    #[must_use]
    pub fn with_case(mut self, case: impl Into<String>) -> Self {
        self.case = Some(case.into());
        self
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Set the location and macro of the failing assertion.
    #[must_use]
    pub fn with_failure_site(
        mut self,
        file: impl Into<String>,
        line: u32,
        check: impl Into<String>,
    ) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self.check = Some(check.into());
        self
    }

    #[must_use]
    pub fn with_counts(mut self, checked: u64, failed: u64) -> Self {
        self.assertions_checked = Some(checked);
        self.assertions_failed = Some(failed);
        self
    }

    #[must_use]
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = Some(exit_code);
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Serialize to a single JSONL line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Writes JSONL records, numbering trace ids as `<suite>::<run_id>::<seq>`.
pub struct LogEmitter {
    writer: Box<dyn Write + Send>,
    seq: u64,
    suite: String,
    run_id: String,
}

impl LogEmitter {
    /// Create an emitter that writes to a file.
    pub fn to_file(path: &Path, suite: &str, run_id: &str) -> std::io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::to_writer(std::io::BufWriter::new(file), suite, run_id))
    }

    /// Create an emitter over any writer, e.g. a
    /// [`SharedBuffer`](atto_core::SharedBuffer) in tests.
    #[must_use]
    pub fn to_writer(writer: impl Write + Send + 'static, suite: &str, run_id: &str) -> Self {
        Self {
            writer: Box::new(writer),
            seq: 0,
            suite: suite.to_string(),
            run_id: run_id.to_string(),
        }
    }

    fn next_trace_id(&mut self) -> String {
        self.seq += 1;
        format!("{}::{}::{:03}", self.suite, self.run_id, self.seq)
    }

    /// Emit a bare entry with an auto-generated trace id.
    pub fn emit(&mut self, level: LogLevel, event: &str) -> std::io::Result<LogEntry> {
        let trace_id = self.next_trace_id();
        let entry = LogEntry::new(&trace_id, level, event).with_suite(&self.suite);
        self.write_entry(&entry)?;
        Ok(entry)
    }

    /// Emit a fully-populated entry, filling in trace id and suite when absent.
    pub fn emit_entry(&mut self, mut entry: LogEntry) -> std::io::Result<()> {
        if entry.trace_id.is_empty() {
            entry.trace_id = self.next_trace_id();
        }
        if entry.suite.is_none() {
            entry.suite = Some(self.suite.clone());
        }
        self.write_entry(&entry)
    }

    /// Emit a `case_finished` record.
    pub fn emit_case(&mut self, result: &CaseResult) -> std::io::Result<()> {
        let outcome = Outcome::of(result);
        let level = if result.as_expected() {
            LogLevel::Info
        } else {
            LogLevel::Error
        };
        let mut entry = LogEntry::new("", level, "case_finished")
            .with_case(&result.name)
            .with_outcome(outcome)
            .with_counts(result.assertions_checked, result.assertions_failed);
        if let Some(failure) = &result.failure {
            entry = entry
                .with_failure_site(&failure.file, failure.line, failure.check.macro_name())
                .with_details(serde_json::json!({ "expression": failure.expression }));
        }
        self.emit_entry(entry)
    }

    /// Emit a `run_finished` record.
    pub fn emit_run(&mut self, summary: &RunSummary, exit_code: i32) -> std::io::Result<()> {
        let level = if exit_code == 0 {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };
        let entry = LogEntry::new("", level, "run_finished")
            .with_counts(summary.assertions_checked, summary.assertions_failed)
            .with_exit_code(exit_code)
            .with_details(serde_json::json!({
                "cases_total": summary.cases_total,
                "cases_failed": summary.cases_failed,
                "expected_failures": summary.expected_failures,
                "unexpected_outcomes": summary.unexpected_outcomes,
            }));
        self.emit_entry(entry)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    fn write_entry(&mut self, entry: &LogEntry) -> std::io::Result<()> {
        let line = entry.to_jsonl().map_err(std::io::Error::other)?;
        writeln!(self.writer, "{line}")
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validation error for a log line.
#[derive(Debug)]
pub struct LogValidationError {
    pub line_number: usize,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for LogValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: field '{}': {}",
            self.line_number, self.field, self.message
        )
    }
}

/// Validate a single JSONL line against the log schema.
pub fn validate_log_line(
    line: &str,
    line_number: usize,
) -> Result<LogEntry, Vec<LogValidationError>> {
    let mut errors = Vec::new();
    let error = |field: &str, message: String| LogValidationError {
        line_number,
        field: field.to_string(),
        message,
    };

    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => return Err(vec![error("<json>", format!("invalid JSON: {e}"))]),
    };
    let Some(obj) = value.as_object() else {
        return Err(vec![error("<root>", "expected JSON object".to_string())]);
    };

    for field in ["timestamp", "trace_id", "level", "event"] {
        if !obj.contains_key(field) {
            errors.push(error(field, "required field missing".to_string()));
        }
    }

    if let Some(level) = obj.get("level").and_then(|v| v.as_str())
        && !["debug", "info", "warn", "error"].contains(&level)
    {
        errors.push(error("level", format!("invalid level: '{level}'")));
    }

    if let Some(outcome) = obj.get("outcome").and_then(|v| v.as_str())
        && !["pass", "fail", "xfail", "xpass"].contains(&outcome)
    {
        errors.push(error("outcome", format!("invalid outcome: '{outcome}'")));
    }

    // A case record always names its case and verdict.
    if obj.get("event").and_then(|v| v.as_str()) == Some("case_finished") {
        for field in ["case", "outcome"] {
            if !obj.contains_key(field) {
                errors.push(error(field, "case_finished requires this field".to_string()));
            }
        }
    }

    if let Some(trace_id) = obj.get("trace_id").and_then(|v| v.as_str())
        && trace_id.split("::").count() != 3
    {
        errors.push(error(
            "trace_id",
            format!("trace_id should follow <suite>::<run_id>::<seq> format, got: '{trace_id}'"),
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value::<LogEntry>(value)
        .map_err(|e| vec![error("<deserialization>", format!("failed to deserialize: {e}"))])
}

/// Validate an entire JSONL file.
///
/// Returns the non-empty line count and any validation errors found.
pub fn validate_log_file(path: &Path) -> Result<(usize, Vec<LogValidationError>), std::io::Error> {
    let content = std::fs::read_to_string(path)?;
    let mut all_errors = Vec::new();
    let mut line_count = 0;

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        line_count += 1;
        if let Err(errs) = validate_log_line(line, i + 1) {
            all_errors.extend(errs);
        }
    }

    Ok((line_count, all_errors))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn now_utc() -> String {
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format_utc(duration.as_secs(), duration.subsec_millis())
}

fn format_utc(secs: u64, millis: u32) -> String {
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year,
        month,
        day,
        (secs % 86_400) / 3600,
        (secs % 3600) / 60,
        secs % 60,
        millis,
    )
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::FailureRecord;
    use atto_core::{CheckKind, SharedBuffer};

    fn failed_case() -> CaseResult {
        CaseResult {
            name: "test_eq".to_string(),
            passed: false,
            expected_failure: true,
            assertions_checked: 3,
            assertions_failed: 1,
            failure: Some(FailureRecord {
                file: "selftest.rs".to_string(),
                line: 42,
                check: CheckKind::Eq,
                expression: "100, 1".to_string(),
                message: String::new(),
            }),
        }
    }

    #[test]
    fn log_entry_serializes_required_fields() {
        let entry = LogEntry::new("selftest::run-1::001", LogLevel::Info, "run_started");
        let json = entry.to_jsonl().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["timestamp"].is_string());
        assert_eq!(parsed["trace_id"], "selftest::run-1::001");
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "run_started");
        assert!(parsed.get("case").is_none());
        assert!(parsed.get("outcome").is_none());
    }

    #[test]
    fn emitter_generates_sequential_trace_ids() {
        let mut emitter = LogEmitter::to_writer(std::io::sink(), "selftest", "run-42");
        let e1 = emitter.emit(LogLevel::Info, "start").unwrap();
        let e2 = emitter.emit(LogLevel::Info, "end").unwrap();
        assert_eq!(e1.trace_id, "selftest::run-42::001");
        assert_eq!(e2.trace_id, "selftest::run-42::002");
    }

    #[test]
    fn case_record_carries_failure_site() {
        let buf = SharedBuffer::new();
        let mut emitter = LogEmitter::to_writer(buf.clone(), "selftest", "r");
        emitter.emit_case(&failed_case()).unwrap();
        emitter.flush().unwrap();

        let lines = buf.lines();
        assert_eq!(lines.len(), 1);
        let entry = validate_log_line(&lines[0], 1).unwrap();
        assert_eq!(entry.event, "case_finished");
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.outcome, Some(Outcome::Xfail));
        assert_eq!(entry.case.as_deref(), Some("test_eq"));
        assert_eq!(entry.line, Some(42));
        assert_eq!(entry.check.as_deref(), Some("atto_eq"));
        assert_eq!(entry.assertions_checked, Some(3));
    }

    #[test]
    fn validate_missing_required_field() {
        let line = r#"{"trace_id":"a::b::001","level":"info","event":"x"}"#;
        let errs = validate_log_line(line, 7).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "timestamp");
        assert_eq!(errs[0].line_number, 7);
    }

    #[test]
    fn validate_rejects_bad_enums_and_trace_id() {
        let line = r#"{"timestamp":"t","trace_id":"plain","level":"loud","event":"x","outcome":"maybe"}"#;
        let errs = validate_log_line(line, 1).unwrap_err();
        let fields: Vec<_> = errs.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"level"));
        assert!(fields.contains(&"outcome"));
        assert!(fields.contains(&"trace_id"));
    }

    #[test]
    fn validate_case_record_needs_case_name() {
        let line = r#"{"timestamp":"t","trace_id":"a::b::001","level":"info","event":"case_finished","outcome":"pass"}"#;
        let errs = validate_log_line(line, 1).unwrap_err();
        assert_eq!(errs[0].field, "case");
    }

    #[test]
    fn validate_invalid_json() {
        let errs = validate_log_line("{not json", 1).unwrap_err();
        assert_eq!(errs[0].field, "<json>");
    }

    #[test]
    fn outcome_follows_marking() {
        let mut r = failed_case();
        assert_eq!(Outcome::of(&r), Outcome::Xfail);
        r.expected_failure = false;
        assert_eq!(Outcome::of(&r), Outcome::Fail);
        r.passed = true;
        assert_eq!(Outcome::of(&r), Outcome::Pass);
        r.expected_failure = true;
        assert_eq!(Outcome::of(&r), Outcome::Xpass);
    }

    #[test]
    fn utc_formatting_uses_calendar_dates() {
        assert_eq!(format_utc(0, 0), "1970-01-01T00:00:00.000Z");
        // 2000-02-29 12:34:56 UTC
        assert_eq!(format_utc(951_827_696, 7), "2000-02-29T12:34:56.007Z");
        // 2024-12-31 23:59:59 UTC
        assert_eq!(format_utc(1_735_689_599, 999), "2024-12-31T23:59:59.999Z");
    }
}
