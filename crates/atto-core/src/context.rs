//! The assertion engine.
//!
//! A [`TestContext`] is created by whoever drives a run and handed by
//! `&mut` to every test case. The assertion macros evaluate a predicate and
//! pass the verdict to [`TestContext::check`], which updates the counters,
//! writes the `FAIL` line and tells the macro whether to bail out.

use crate::config::{Config, Tolerances};
use crate::error::{AssertionFailed, CheckKind};
use crate::location::Location;
use crate::sink::DiagnosticSink;
use crate::state::TestRunState;

#[derive(Debug, Default)]
pub struct TestContext {
    state: TestRunState,
    tolerances: Tolerances,
    sink: DiagnosticSink,
    failures: Vec<AssertionFailed>,
}

impl TestContext {
    /// Default tolerances, diagnostics on stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            tolerances: config.tolerances,
            sink: config.stream.into(),
            ..Self::default()
        }
    }

    /// Context configured from `ATTO_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(&Config::from_env())
    }

    #[must_use]
    pub fn with_sink(mut self, sink: impl Into<DiagnosticSink>) -> Self {
        self.sink = sink.into();
        self
    }

    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Record one verdict.
    ///
    /// A pass only bumps the checked counter. A failure bumps both
    /// counters, taints the run, writes the diagnostic line and comes back
    /// as `Err` so the caller can leave the test case.
    pub fn check(
        &mut self,
        passed: bool,
        kind: CheckKind,
        location: Location,
        expression: &'static str,
    ) -> Result<(), AssertionFailed> {
        if passed {
            self.state.record_pass();
            return Ok(());
        }

        self.state.record_failure();
        let failure = AssertionFailed {
            location,
            kind,
            expression,
        };
        // A broken diagnostic stream must not turn into a second failure.
        let _ = self.sink.write_line(&failure.to_string());
        self.failures.push(failure.clone());
        Err(failure)
    }

    /// Write the current counters as a `REPORT` line and return them.
    ///
    /// Read-only with respect to the counters.
    pub fn report(&self, location: Location) -> TestRunState {
        let line = format!(
            "REPORT | {location} | Checked: {:5} | Failed: {:5}",
            self.state.assertions_checked(),
            self.state.assertions_failed()
        );
        let _ = self.sink.write_line(&line);
        self.state
    }

    #[must_use]
    pub fn state(&self) -> &TestRunState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> TestRunState {
        self.state
    }

    #[must_use]
    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    #[must_use]
    pub fn sink(&self) -> &DiagnosticSink {
        &self.sink
    }

    /// Failures recorded so far, oldest first.
    #[must_use]
    pub fn failures(&self) -> &[AssertionFailed] {
        &self.failures
    }

    /// Shorthand for `self.state().any_failed()`.
    #[must_use]
    pub fn any_failed(&self) -> bool {
        self.state.any_failed()
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }

    /// A clean context sharing this one's tolerances and sink, for a parallel worker.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            state: TestRunState::new(),
            tolerances: self.tolerances,
            sink: self.sink.clone(),
            failures: Vec::new(),
        }
    }

    /// Merge a worker context back in at a join point.
    pub fn absorb(&mut self, worker: TestContext) {
        self.state.merge(&worker.state);
        self.failures.extend(worker.failures);
    }
}
