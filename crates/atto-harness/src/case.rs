//! Test cases and suites.

use atto_core::TestContext;

/// Body of a test case. Assertion macros `return` out of it on failure.
pub type CaseFn = fn(&mut TestContext);

/// A single named test case.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    /// Case name, the same one the `FAIL` line prints.
    pub name: &'static str,
    pub run: CaseFn,
    /// The case is required to fail (self-test cases exercising a failing check).
    pub expected_failure: bool,
}

impl TestCase {
    #[must_use]
    pub const fn new(name: &'static str, run: CaseFn) -> Self {
        Self {
            name,
            run,
            expected_failure: false,
        }
    }

    /// Mark this case as one that must fail.
    #[must_use]
    pub const fn should_fail(mut self) -> Self {
        self.expected_failure = true;
        self
    }
}

/// Build a [`TestCase`] named after the function.
///
/// `atto_case!(test_eq)` and `atto_case!(test_eq, should_fail)`.
#[macro_export]
macro_rules! atto_case {
    ($f:ident) => {
        $crate::TestCase::new(::core::stringify!($f), $f)
    };
    ($f:ident, should_fail) => {
        $crate::TestCase::new(::core::stringify!($f), $f).should_fail()
    };
}

/// An ordered collection of test cases.
#[derive(Debug, Clone)]
pub struct TestSuite {
    pub name: &'static str,
    pub cases: Vec<TestCase>,
    /// Cases observe run-wide state, so they must share one context in order.
    pub serial: bool,
}

impl TestSuite {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cases: Vec::new(),
            serial: false,
        }
    }

    #[must_use]
    pub fn with_case(mut self, case: TestCase) -> Self {
        self.cases.push(case);
        self
    }

    #[must_use]
    pub fn with_cases(mut self, cases: impl IntoIterator<Item = TestCase>) -> Self {
        self.cases.extend(cases);
        self
    }

    /// Never split this suite across workers.
    #[must_use]
    pub fn serial(mut self) -> Self {
        self.serial = true;
        self
    }

    /// Number of cases that are required to fail.
    #[must_use]
    pub fn expected_failures(&self) -> usize {
        self.cases.iter().filter(|c| c.expected_failure).count()
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&TestCase> {
        self.cases.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atto_core::atto_fail;

    fn noop(_ctx: &mut TestContext) {}

    fn always_fails(ctx: &mut TestContext) {
        atto_fail!(ctx);
    }

    #[test]
    fn case_macro_uses_function_name() {
        let case = crate::atto_case!(noop);
        assert_eq!(case.name, "noop");
        assert!(!case.expected_failure);

        let case = crate::atto_case!(always_fails, should_fail);
        assert_eq!(case.name, "always_fails");
        assert!(case.expected_failure);
    }

    #[test]
    fn suite_counts_expected_failures() {
        let suite = TestSuite::new("mini")
            .with_case(crate::atto_case!(noop))
            .with_cases([crate::atto_case!(always_fails, should_fail)])
            .serial();
        assert_eq!(suite.cases.len(), 2);
        assert_eq!(suite.expected_failures(), 1);
        assert!(suite.serial);
        assert!(suite.find("always_fails").is_some());
        assert!(suite.find("missing").is_none());
    }
}
