//! Report generation for test runs.

use serde::{Deserialize, Serialize};

use atto_core::TestRunState;

use crate::runner::CaseResult;

/// Aggregate counters of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub assertions_checked: u64,
    pub assertions_failed: u64,
    pub any_failed: bool,
    pub cases_total: usize,
    pub cases_passed: usize,
    pub cases_failed: usize,
    /// Cases marked `should_fail`.
    pub expected_failures: usize,
    /// Cases whose pass/fail verdict differs from their marking.
    pub unexpected_outcomes: usize,
}

impl RunSummary {
    /// Build a summary from case results and the run's final state.
    #[must_use]
    pub fn from_results(results: &[CaseResult], state: &TestRunState) -> Self {
        let cases_total = results.len();
        let cases_passed = results.iter().filter(|r| r.passed).count();
        Self {
            assertions_checked: state.assertions_checked(),
            assertions_failed: state.assertions_failed(),
            any_failed: state.any_failed(),
            cases_total,
            cases_passed,
            cases_failed: cases_total - cases_passed,
            expected_failures: results.iter().filter(|r| r.expected_failure).count(),
            unexpected_outcomes: results.iter().filter(|r| !r.as_expected()).count(),
        }
    }

    /// Exit code of an ordinary run: 1 once any assertion failed.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(self.any_failed)
    }

    /// A self-test succeeds when it produced exactly the failures it asked for.
    #[must_use]
    pub fn self_test_passed(&self) -> bool {
        self.unexpected_outcomes == 0
            && self.assertions_failed == self.expected_failures as u64
    }

    /// Exit code of a self-test run: 0 when [`Self::self_test_passed`].
    #[must_use]
    pub fn self_test_exit_code(&self) -> i32 {
        i32::from(!self.self_test_passed())
    }
}

/// Full report of a run: summary plus per-case rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Report title.
    pub title: String,
    /// Runner campaign name.
    pub campaign: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    pub summary: RunSummary,
    pub cases: Vec<CaseResult>,
}

impl RunReport {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        campaign: impl Into<String>,
        timestamp: impl Into<String>,
        results: Vec<CaseResult>,
        state: &TestRunState,
    ) -> Self {
        Self {
            title: title.into(),
            campaign: campaign.into(),
            timestamp: timestamp.into(),
            summary: RunSummary::from_results(&results, state),
            cases: results,
        }
    }

    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Campaign: {}\n", self.campaign));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!(
            "- Assertions: {} checked, {} failed\n",
            self.summary.assertions_checked, self.summary.assertions_failed
        ));
        out.push_str(&format!(
            "- Cases: {} total, {} passed, {} failed ({} expected)\n",
            self.summary.cases_total,
            self.summary.cases_passed,
            self.summary.cases_failed,
            self.summary.expected_failures
        ));
        out.push_str(&format!(
            "- Unexpected outcomes: {}\n\n",
            self.summary.unexpected_outcomes
        ));

        out.push_str("| Case | Checked | Status | Failure |\n");
        out.push_str("|------|---------|--------|---------|\n");
        for r in &self.cases {
            let status = match (r.passed, r.expected_failure) {
                (true, false) => "PASS",
                (false, true) => "XFAIL",
                (true, true) => "XPASS",
                (false, false) => "FAIL",
            };
            let failure = r
                .failure
                .as_ref()
                .map(|f| format!("{}:{} `{}`", f.file, f.line, f.check))
                .unwrap_or_default();
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                r.name, r.assertions_checked, status, failure
            ));
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
