//! Call-site identification for diagnostics.

use serde::Serialize;

/// Where an assertion was written: file, line and enclosing test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub test_case: &'static str,
}

impl Location {
    #[must_use]
    pub const fn new(file: &'static str, line: u32, test_case: &'static str) -> Self {
        Self {
            file,
            line,
            test_case,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "File: {} | Line: {:4} | Test case: {}",
            self.file, self.line, self.test_case
        )
    }
}

/// Reduce a `type_name` path of a function item to the function's own name.
///
/// Closure frames are skipped, so a check inside a closure reports the
/// function that defines it.
#[must_use]
pub fn short_function_name(path: &'static str) -> &'static str {
    let mut path = path;
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Name of the enclosing function, as a `&'static str`.
#[doc(hidden)]
#[macro_export]
macro_rules! __atto_function_name {
    () => {{
        fn __atto_probe() {}
        fn __atto_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let path = __atto_type_name_of(__atto_probe);
        $crate::location::short_function_name(
            path.strip_suffix("::__atto_probe").unwrap_or(path),
        )
    }};
}

/// [`Location`] of the macro invocation.
#[macro_export]
macro_rules! atto_here {
    () => {
        $crate::Location::new(::core::file!(), ::core::line!(), $crate::__atto_function_name!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_right_aligned_to_four() {
        let loc = Location::new("tst/selftest.rs", 7, "test_eq");
        assert_eq!(
            loc.to_string(),
            "File: tst/selftest.rs | Line:    7 | Test case: test_eq"
        );
        let wide = Location::new("a.rs", 123_456, "f");
        assert_eq!(wide.to_string(), "File: a.rs | Line: 123456 | Test case: f");
    }

    #[test]
    fn short_name_strips_module_path_and_closures() {
        assert_eq!(short_function_name("crate::suite::test_eq"), "test_eq");
        assert_eq!(
            short_function_name("crate::suite::test_eq::{{closure}}::{{closure}}"),
            "test_eq"
        );
        assert_eq!(short_function_name("main"), "main");
    }

    #[test]
    fn here_names_enclosing_function() {
        let loc = crate::atto_here!();
        assert_eq!(loc.test_case, "here_names_enclosing_function");
        assert_eq!(loc.file, file!());
        assert_eq!(loc.line, line!() - 3);
    }

    #[test]
    fn here_inside_closure_names_outer_function() {
        let probe = || crate::atto_here!();
        assert_eq!(probe().test_case, "here_inside_closure_names_outer_function");
    }
}
