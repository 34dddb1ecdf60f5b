//! Test execution engine.

use serde::{Deserialize, Serialize};

use atto_core::{AssertionFailed, CheckKind, TestContext};

use crate::case::{TestCase, TestSuite};

/// Owned copy of the failure that ended a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub file: String,
    pub line: u32,
    pub check: CheckKind,
    /// Source text of the failing macro's arguments.
    pub expression: String,
    /// The `FAIL | ...` diagnostic line.
    pub message: String,
}

impl From<&AssertionFailed> for FailureRecord {
    fn from(failure: &AssertionFailed) -> Self {
        Self {
            file: failure.location.file.to_string(),
            line: failure.location.line,
            check: failure.kind,
            expression: failure.expression.to_string(),
            message: failure.to_string(),
        }
    }
}

/// Result of running one test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub name: String,
    /// No assertion failed.
    pub passed: bool,
    pub expected_failure: bool,
    pub assertions_checked: u64,
    pub assertions_failed: u64,
    pub failure: Option<FailureRecord>,
}

impl CaseResult {
    /// Passed when it should, or failed when it was marked `should_fail`.
    #[must_use]
    pub fn as_expected(&self) -> bool {
        self.passed != self.expected_failure
    }
}

/// Runs suites against a [`TestContext`] and collects per-case results.
#[derive(Debug, Clone)]
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    jobs: usize,
}

impl TestRunner {
    /// Create a new sequential runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
            jobs: 1,
        }
    }

    /// Spread cases over `jobs` worker threads (at least one).
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    #[must_use]
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Run every case of `suite`, in suite order, and return their results.
    ///
    /// Counters and failures accumulate in `ctx`. With more than one job,
    /// cases are dealt round-robin to forked contexts that are merged back
    /// into `ctx` once every worker has finished.
    pub fn run(&self, suite: &TestSuite, ctx: &mut TestContext) -> Vec<CaseResult> {
        let workers = self.jobs.min(suite.cases.len());
        if suite.serial || workers <= 1 {
            return suite
                .cases
                .iter()
                .map(|case| run_case(case, ctx))
                .collect();
        }

        let partitions: Vec<Vec<usize>> = (0..workers)
            .map(|w| (w..suite.cases.len()).step_by(workers).collect())
            .collect();
        let forks: Vec<TestContext> = (0..workers).map(|_| ctx.fork()).collect();
        let cases = &suite.cases;

        let finished: Vec<(TestContext, Vec<(usize, CaseResult)>)> = std::thread::scope(|s| {
            let handles: Vec<_> = partitions
                .into_iter()
                .zip(forks)
                .map(|(indices, mut worker)| {
                    s.spawn(move || {
                        let results: Vec<(usize, CaseResult)> = indices
                            .into_iter()
                            .map(|i| (i, run_case(&cases[i], &mut worker)))
                            .collect();
                        (worker, results)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| match h.join() {
                    Ok(done) => done,
                    Err(payload) => std::panic::resume_unwind(payload),
                })
                .collect()
        });

        let mut indexed = Vec::with_capacity(suite.cases.len());
        for (worker, results) in finished {
            ctx.absorb(worker);
            indexed.extend(results);
        }
        indexed.sort_by_key(|(i, _)| *i);
        indexed.into_iter().map(|(_, r)| r).collect()
    }
}

fn run_case(case: &TestCase, ctx: &mut TestContext) -> CaseResult {
    let before = *ctx.state();
    let failures_before = ctx.failures().len();

    (case.run)(ctx);

    let delta = ctx.state().since(&before);
    CaseResult {
        name: case.name.to_string(),
        passed: !delta.any_failed(),
        expected_failure: case.expected_failure,
        assertions_checked: delta.assertions_checked(),
        assertions_failed: delta.assertions_failed(),
        failure: ctx.failures().get(failures_before).map(FailureRecord::from),
    }
}
