//! Demonstration program: six test cases, each stopping at one failing
//! assertion. A run ends tainted, so the process exit code is 1.

use atto_core::{
    TestContext, atto_assert, atto_dapprox, atto_fail, atto_fapprox, atto_flag, atto_memeq,
    atto_noflag, atto_streq,
};

use crate::atto_case;
use crate::case::TestSuite;

pub const NAME: &str = "example";

#[must_use]
pub fn suite() -> TestSuite {
    TestSuite::new(NAME).with_cases([
        atto_case!(test_case_ints, should_fail),
        atto_case!(test_case_flags, should_fail),
        atto_case!(test_case_floats_and_doubles, should_fail),
        atto_case!(test_case_strings, should_fail),
        atto_case!(test_case_arrays, should_fail),
        atto_case!(test_case_forced_fail, should_fail),
    ])
}

fn test_case_ints(ctx: &mut TestContext) {
    let a = 1;
    let b = 2;

    atto_assert!(ctx, a < b);
    atto_assert!(ctx, a == b); // fails and ends the case
    atto_assert!(ctx, 40 < 2); // never evaluated
}

fn test_case_flags(ctx: &mut TestContext) {
    let flags: u8 = 0x83;

    atto_assert!(ctx, flags != 0);
    atto_flag!(ctx, flags, 0x01);
    atto_flag!(ctx, flags, 0x81);
    atto_noflag!(ctx, flags, 0x04);
    atto_noflag!(ctx, flags, 0x02); // fails
}

#[allow(clippy::approx_constant)]
fn test_case_floats_and_doubles(ctx: &mut TestContext) {
    let radius = 0.4f32;
    let pi = 3.14159f32;
    let circle_area = pi * radius * radius;
    atto_assert!(ctx, circle_area == 0.502_654_433_f32);
    atto_fapprox!(ctx, circle_area, 0.502_654_4_f32);

    let d_radius = 0.4f64;
    let d_pi = std::f64::consts::PI;
    let d_circle_area = d_pi * d_radius * d_radius;
    atto_assert!(ctx, d_circle_area == 0.502_654_824_574_366_9);
    atto_dapprox!(ctx, d_circle_area, 0.502_654_824_57);

    atto_fapprox!(ctx, 1.000001f32, 1.0f32);
    atto_fapprox!(ctx, 1.0001f32, 1.0f32); // fails
}

fn test_case_strings(ctx: &mut TestContext) {
    let mut result = String::with_capacity(11);
    result.push_str("hello");
    result.push_str("world");

    atto_streq!(ctx, "helloworld", result, 11);
    atto_streq!(ctx, "helloworld", result, 20);
    atto_streq!(ctx, "helloworld", result, 6);
    atto_streq!(ctx, "HELLOworld", result, 11); // fails
}

fn test_case_arrays(ctx: &mut TestContext) {
    let a1 = [1u8, 2, 3, 4];
    let a2 = [1u8, 2, 3, 4];
    let a3 = [1u8, 2, 120, 120];

    atto_memeq!(ctx, a1, a2, 2);
    atto_memeq!(ctx, a1, a2, 4);
    atto_memeq!(ctx, a1, a3, 2);
    atto_memeq!(ctx, a1, a3, 4); // fails
}

fn test_case_forced_fail(ctx: &mut TestContext) {
    let data = [0u8, 0, 0, 42, 0];
    for byte in data {
        if byte != 0 {
            atto_fail!(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::TestRunner;
    use atto_core::SharedBuffer;

    #[test]
    fn each_case_fails_exactly_once() {
        let buf = SharedBuffer::new();
        let mut ctx = TestContext::new().with_sink(buf.clone());
        let results = TestRunner::new("example").run(&suite(), &mut ctx);

        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|r| !r.passed && r.assertions_failed == 1));
        assert_eq!(ctx.exit_code(), 1);
        assert_eq!(ctx.state().assertions_failed(), 6);
        // 2 + 5 + 6 + 4 + 4 + 1
        assert_eq!(ctx.state().assertions_checked(), 22);

        let lines = buf.lines();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].ends_with("| Test case: test_case_ints"));
        assert!(lines[5].ends_with("| Test case: test_case_forced_fail"));
    }
}
