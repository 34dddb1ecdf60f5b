//! Integration test: built-in self-test suite
//!
//! Validates that:
//! 1. The self-test produces exactly as many failures as cases marked to fail.
//! 2. Each failing case prints one FAIL line naming itself.
//! 3. A serial suite gives identical results regardless of `--jobs`.
//! 4. The example suite taints the run and exits 1.

use atto_core::{DiagnosticSink, SharedBuffer, TestContext};
use atto_harness::suites::{example, selftest};
use atto_harness::{RunReport, TestRunner};

#[test]
fn selftest_failures_match_expectations() {
    let suite = selftest::suite();
    let buf = SharedBuffer::new();
    let mut ctx = TestContext::new().with_sink(buf.clone());
    let results = TestRunner::new("selftest").run(&suite, &mut ctx);

    let report = RunReport::new("selftest", "selftest", "T0", results, ctx.state());
    assert!(report.summary.self_test_passed(), "{}", report.to_markdown());
    assert_eq!(report.summary.self_test_exit_code(), 0);
    assert_eq!(
        report.summary.assertions_failed,
        suite.expected_failures() as u64
    );
    assert!(report.summary.any_failed);
    assert_eq!(report.summary.exit_code(), 1);

    let lines: Vec<_> = buf
        .lines()
        .into_iter()
        .filter(|l| l.starts_with("FAIL | "))
        .collect();
    assert_eq!(lines.len(), suite.expected_failures());
    for (line, case) in lines
        .iter()
        .zip(suite.cases.iter().filter(|c| c.expected_failure))
    {
        assert!(line.ends_with(&format!("| Test case: {}", case.name)), "{line}");
    }
}

#[test]
fn selftest_reports_mid_case_without_counting() {
    let suite = selftest::suite();
    let buf = SharedBuffer::new();
    let mut ctx = TestContext::new().with_sink(buf.clone());
    TestRunner::new("selftest").run(&suite, &mut ctx);

    let reports: Vec<_> = buf
        .lines()
        .into_iter()
        .filter(|l| l.starts_with("REPORT | "))
        .collect();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].contains("| Test case: test_nzeros | Checked: "));
}

#[test]
fn serial_suite_is_independent_of_jobs() {
    let suite = selftest::suite();

    let mut one = TestContext::new().with_sink(DiagnosticSink::Discard);
    let a = TestRunner::new("selftest").run(&suite, &mut one);

    let mut many = TestContext::new().with_sink(DiagnosticSink::Discard);
    let b = TestRunner::new("selftest").with_jobs(4).run(&suite, &mut many);

    assert_eq!(one.state(), many.state());
    assert_eq!(a.len(), b.len());
    assert!(b.iter().all(|r| r.as_expected()));
}

#[test]
fn example_suite_runs_in_parallel_and_fails() {
    let suite = example::suite();
    let mut ctx = TestContext::new().with_sink(DiagnosticSink::Discard);
    let results = TestRunner::new("example").with_jobs(3).run(&suite, &mut ctx);

    let report = RunReport::new("example", "example", "T0", results, ctx.state());
    assert_eq!(report.summary.cases_failed, 6);
    assert_eq!(report.summary.unexpected_outcomes, 0);
    assert_eq!(report.summary.exit_code(), 1);
    assert_eq!(ctx.exit_code(), 1);
}
