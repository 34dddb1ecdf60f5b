//! Built-in suites shipped with the `atto` binary.

pub mod example;
pub mod selftest;

use crate::case::TestSuite;
use crate::error::HarnessError;

/// Names accepted by [`suite_by_name`].
pub const SUITE_NAMES: [&str; 2] = [selftest::NAME, example::NAME];

/// Every built-in suite, in [`SUITE_NAMES`] order.
#[must_use]
pub fn all() -> Vec<TestSuite> {
    vec![selftest::suite(), example::suite()]
}

/// Look up a built-in suite by name.
pub fn suite_by_name(name: &str) -> Result<TestSuite, HarnessError> {
    match name {
        selftest::NAME => Ok(selftest::suite()),
        example::NAME => Ok(example::suite()),
        other => Err(HarnessError::UnknownSuite(other.to_string())),
    }
}
