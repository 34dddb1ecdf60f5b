//! Pass/fail bookkeeping for a test run.
//!
//! A [`TestRunState`] is owned by whoever drives the run (a runner or a
//! plain `main`). It only ever moves forward: counters grow and the
//! failure flag, once raised, stays raised.

use serde::{Deserialize, Serialize};

/// Observable phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunPhase {
    /// No assertion has failed yet.
    Clean,
    /// At least one assertion has failed. Terminal.
    Tainted,
}

/// Counters shared by every check evaluated in one run.
///
/// Invariants: `assertions_failed <= assertions_checked` and
/// `any_failed == (assertions_failed > 0)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRunState {
    any_failed: bool,
    assertions_checked: u64,
    assertions_failed: u64,
}

impl TestRunState {
    /// Fresh state in the [`RunPhase::Clean`] phase.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            any_failed: false,
            assertions_checked: 0,
            assertions_failed: 0,
        }
    }

    /// Record a passing assertion.
    pub fn record_pass(&mut self) {
        self.assertions_checked += 1;
    }

    /// Record a failing assertion. Moves the run to [`RunPhase::Tainted`].
    pub fn record_failure(&mut self) {
        self.assertions_failed += 1;
        self.any_failed = true;
        self.assertions_checked += 1;
    }

    #[must_use]
    pub const fn any_failed(&self) -> bool {
        self.any_failed
    }

    #[must_use]
    pub const fn assertions_checked(&self) -> u64 {
        self.assertions_checked
    }

    #[must_use]
    pub const fn assertions_failed(&self) -> u64 {
        self.assertions_failed
    }

    /// Assertions that passed so far.
    #[must_use]
    pub const fn assertions_passed(&self) -> u64 {
        self.assertions_checked - self.assertions_failed
    }

    #[must_use]
    pub const fn phase(&self) -> RunPhase {
        if self.any_failed {
            RunPhase::Tainted
        } else {
            RunPhase::Clean
        }
    }

    /// Process exit code for the embedding program: 0 when clean, 1 when tainted.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.any_failed { 1 } else { 0 }
    }

    /// Fold a worker's partition into this state.
    ///
    /// Used at the join point of a parallel run; the result is the same as
    /// if every assertion had been recorded here directly.
    pub fn merge(&mut self, other: &TestRunState) {
        self.assertions_checked += other.assertions_checked;
        self.assertions_failed += other.assertions_failed;
        self.any_failed |= other.any_failed;
    }

    /// Counters accumulated since `earlier` was snapshotted from this state.
    #[must_use]
    pub fn since(&self, earlier: &TestRunState) -> TestRunState {
        let assertions_failed = self.assertions_failed - earlier.assertions_failed;
        TestRunState {
            any_failed: assertions_failed > 0,
            assertions_checked: self.assertions_checked - earlier.assertions_checked,
            assertions_failed,
        }
    }
}
