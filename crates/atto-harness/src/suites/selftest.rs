//! Self-test of the assertion macros.
//!
//! Each case marked `should_fail` ends with exactly one failing assertion, so
//! a correct engine reports as many failed assertions as there are such
//! cases. The first and last cases read run-wide state, hence `serial`.

use atto_core::{
    TestContext, atto_assert, atto_dapprox, atto_ddelta, atto_eq, atto_fail, atto_false,
    atto_fapprox, atto_fdelta, atto_finite, atto_flag, atto_ge, atto_gt, atto_inf, atto_le,
    atto_lt, atto_memeq, atto_memneq, atto_minusinf, atto_nan, atto_neq, atto_noflag,
    atto_notfinite, atto_nzeros, atto_plusinf, atto_report, atto_streq, atto_true, atto_zeros,
};

use crate::atto_case;
use crate::case::TestSuite;

pub const NAME: &str = "selftest";

#[must_use]
pub fn suite() -> TestSuite {
    TestSuite::new(NAME)
        .with_cases([
            atto_case!(test_initially_no_test_have_failed),
            atto_case!(test_assert, should_fail),
            atto_case!(test_true, should_fail),
            atto_case!(test_false, should_fail),
            atto_case!(test_eq, should_fail),
            atto_case!(test_neq, should_fail),
            atto_case!(test_neq_casting, should_fail),
            atto_case!(test_gt, should_fail),
            atto_case!(test_gt_equality, should_fail),
            atto_case!(test_ge, should_fail),
            atto_case!(test_ge_equality),
            atto_case!(test_lt, should_fail),
            atto_case!(test_lt_equality, should_fail),
            atto_case!(test_le, should_fail),
            atto_case!(test_le_equality),
            atto_case!(test_fapprox, should_fail),
            atto_case!(test_fdelta, should_fail),
            atto_case!(test_fdelta_negatives, should_fail),
            atto_case!(test_dapprox, should_fail),
            atto_case!(test_ddelta, should_fail),
            atto_case!(test_ddelta_negatives, should_fail),
            atto_case!(test_nan),
            atto_case!(test_nan_finite_float, should_fail),
            atto_case!(test_nan_finite_double, should_fail),
            atto_case!(test_nan_infinity, should_fail),
            atto_case!(test_inf),
            atto_case!(test_inf_finite_float, should_fail),
            atto_case!(test_inf_finite_double, should_fail),
            atto_case!(test_inf_nan, should_fail),
            atto_case!(test_plusinf, should_fail),
            atto_case!(test_plusinf_finite_float, should_fail),
            atto_case!(test_plusinf_finite_double, should_fail),
            atto_case!(test_plusinf_nan, should_fail),
            atto_case!(test_minusinf, should_fail),
            atto_case!(test_minusinf_finite_float, should_fail),
            atto_case!(test_minusinf_finite_double, should_fail),
            atto_case!(test_minusinf_nan, should_fail),
            atto_case!(test_notfinite),
            atto_case!(test_notfinite_finite_float, should_fail),
            atto_case!(test_notfinite_finite_double, should_fail),
            atto_case!(test_finite),
            atto_case!(test_finite_plusinf, should_fail),
            atto_case!(test_finite_minusinf, should_fail),
            atto_case!(test_finite_nan_const, should_fail),
            atto_case!(test_finite_nan_computed_float, should_fail),
            atto_case!(test_finite_nan_computed_double, should_fail),
            atto_case!(test_flag, should_fail),
            atto_case!(test_flag_when_none, should_fail),
            atto_case!(test_noflag, should_fail),
            atto_case!(test_streq, should_fail),
            atto_case!(test_memeq, should_fail),
            atto_case!(test_memneq, should_fail),
            atto_case!(test_zeros, should_fail),
            atto_case!(test_nzeros, should_fail),
            atto_case!(test_fail, should_fail),
            atto_case!(test_at_the_end_some_tests_have_failed),
        ])
        .serial()
}

fn test_initially_no_test_have_failed(ctx: &mut TestContext) {
    atto_eq!(ctx, ctx.any_failed(), false);
}

fn test_assert(ctx: &mut TestContext) {
    atto_assert!(ctx, true);
    atto_assert!(ctx, false);
}

fn test_true(ctx: &mut TestContext) {
    atto_true!(ctx, true);
    atto_true!(ctx, false);
}

fn test_false(ctx: &mut TestContext) {
    atto_false!(ctx, 3000 < 0);
    atto_false!(ctx, false);
    atto_false!(ctx, true);
}

fn test_eq(ctx: &mut TestContext) {
    atto_eq!(ctx, 12, 12);
    atto_eq!(ctx, 12.0f32, 12u32 as f32);
    atto_eq!(ctx, 100, 1);
}

fn test_neq(ctx: &mut TestContext) {
    atto_neq!(ctx, 100, 1);
    atto_neq!(ctx, 12, 12);
}

fn test_neq_casting(ctx: &mut TestContext) {
    atto_neq!(ctx, 12.0f32, 12u32 as f32);
}

fn test_gt(ctx: &mut TestContext) {
    atto_gt!(ctx, 100, 1);
    atto_gt!(ctx, 1, 100);
}

fn test_gt_equality(ctx: &mut TestContext) {
    atto_gt!(ctx, 100, 100);
}

fn test_ge(ctx: &mut TestContext) {
    atto_ge!(ctx, 100, 1);
    atto_ge!(ctx, 1, 100);
}

fn test_ge_equality(ctx: &mut TestContext) {
    atto_ge!(ctx, 100, 100);
}

fn test_lt(ctx: &mut TestContext) {
    atto_lt!(ctx, 1, 100);
    atto_lt!(ctx, 100, 1);
}

fn test_lt_equality(ctx: &mut TestContext) {
    atto_lt!(ctx, 100, 100);
}

fn test_le(ctx: &mut TestContext) {
    atto_le!(ctx, 1, 100);
    atto_le!(ctx, 100, 1);
}

fn test_le_equality(ctx: &mut TestContext) {
    atto_le!(ctx, 100, 100);
}

fn test_fapprox(ctx: &mut TestContext) {
    atto_fapprox!(ctx, 1.0f32, 1.0f32);
    atto_fapprox!(ctx, 1.0f32, 1u32);
    atto_fapprox!(ctx, 1.0f32, 1.000001f32);
    atto_fapprox!(ctx, 1.0f32, 1.1f32);
}

fn test_fdelta(ctx: &mut TestContext) {
    atto_fdelta!(ctx, 1.0f32, 1.0f32, 0.01f32);
    atto_fdelta!(ctx, 1.0f32, 1.1f32, 0.15f32);
    atto_fdelta!(ctx, 1.0f32, 1.000001f32, 0.01f32);
    atto_fdelta!(ctx, 1.0f32, 1.000_000_01_f32, 0.1f32);
    atto_fdelta!(ctx, 1.0f32, 1.1f32, 0.01f32);
}

fn test_fdelta_negatives(ctx: &mut TestContext) {
    atto_fdelta!(ctx, -1.0f32, -1.0f32, 0.01f32);
    atto_fdelta!(ctx, -1.0f32, -1.0f32, -0.01f32);
    atto_fdelta!(ctx, -1.0f32, -1.000001f32, 0.01f32);
    atto_fdelta!(ctx, -1.0f32, -1.000001f32, -0.01f32);
    atto_fdelta!(ctx, -1.0000001f32, -1.0f32, 0.01f32);
    atto_fdelta!(ctx, -1.0000001f32, -1.0f32, -0.01f32);
    atto_fdelta!(ctx, -1.0f32, -1.1f32, 0.01f32);
}

fn test_dapprox(ctx: &mut TestContext) {
    atto_dapprox!(ctx, 1.0, 1.0);
    atto_dapprox!(ctx, 1.0, 1u32);
    atto_dapprox!(ctx, 1.0, 1.000_000_01);
    atto_dapprox!(ctx, 1.0, 1.1);
}

fn test_ddelta(ctx: &mut TestContext) {
    atto_ddelta!(ctx, 1.0, 1.1, 0.15);
    atto_ddelta!(ctx, 1.0, 1.0, 0.01);
    atto_ddelta!(ctx, 1.0, 1.000001, 0.01);
    atto_ddelta!(ctx, 1.0, 1.1, 0.01);
}

fn test_ddelta_negatives(ctx: &mut TestContext) {
    atto_ddelta!(ctx, -1.0, -1.0, 0.01);
    atto_ddelta!(ctx, -1.0, -1.0, -0.01);
    atto_ddelta!(ctx, -1.0, -1.000001, 0.01);
    atto_ddelta!(ctx, -1.0, -1.000001, -0.01);
    atto_ddelta!(ctx, -1.0000001, -1.0, 0.01);
    atto_ddelta!(ctx, -1.0000001, -1.0, -0.01);
    atto_ddelta!(ctx, -1.0, -1.1, 0.01);
}

fn test_nan(ctx: &mut TestContext) {
    atto_nan!(ctx, f32::NAN);
    atto_nan!(ctx, f64::NAN);
    atto_nan!(ctx, (-1.0f64).sqrt());
    atto_nan!(ctx, (-1.0f32).sqrt());
}

fn test_nan_finite_float(ctx: &mut TestContext) {
    atto_nan!(ctx, 1.0f32);
}

fn test_nan_finite_double(ctx: &mut TestContext) {
    atto_nan!(ctx, 1.0f64);
}

fn test_nan_infinity(ctx: &mut TestContext) {
    atto_nan!(ctx, f32::INFINITY);
}

fn test_inf(ctx: &mut TestContext) {
    atto_inf!(ctx, f32::INFINITY);
    atto_inf!(ctx, f64::INFINITY);
    atto_inf!(ctx, f32::NEG_INFINITY);
}

fn test_inf_finite_float(ctx: &mut TestContext) {
    atto_inf!(ctx, 1.0f32);
}

fn test_inf_finite_double(ctx: &mut TestContext) {
    atto_inf!(ctx, 1.0f64);
}

fn test_inf_nan(ctx: &mut TestContext) {
    atto_inf!(ctx, f32::NAN);
}

fn test_plusinf(ctx: &mut TestContext) {
    atto_plusinf!(ctx, f32::INFINITY);
    atto_plusinf!(ctx, f64::INFINITY);
    atto_plusinf!(ctx, f32::NEG_INFINITY);
}

fn test_plusinf_finite_float(ctx: &mut TestContext) {
    atto_plusinf!(ctx, 1.0f32);
}

fn test_plusinf_finite_double(ctx: &mut TestContext) {
    atto_plusinf!(ctx, 1.0f64);
}

fn test_plusinf_nan(ctx: &mut TestContext) {
    atto_plusinf!(ctx, f32::NAN);
}

fn test_minusinf(ctx: &mut TestContext) {
    atto_minusinf!(ctx, f32::NEG_INFINITY);
    atto_minusinf!(ctx, f32::INFINITY);
}

fn test_minusinf_finite_float(ctx: &mut TestContext) {
    atto_minusinf!(ctx, 1.0f32);
}

fn test_minusinf_finite_double(ctx: &mut TestContext) {
    atto_minusinf!(ctx, 1.0f64);
}

fn test_minusinf_nan(ctx: &mut TestContext) {
    atto_minusinf!(ctx, f32::NAN);
}

fn test_notfinite(ctx: &mut TestContext) {
    atto_notfinite!(ctx, f32::INFINITY);
    atto_notfinite!(ctx, f64::INFINITY);
    atto_notfinite!(ctx, f32::NEG_INFINITY);
    atto_notfinite!(ctx, f32::NAN);
    atto_notfinite!(ctx, (-1.0f32).sqrt());
    atto_notfinite!(ctx, (-1.0f64).sqrt());
}

fn test_notfinite_finite_float(ctx: &mut TestContext) {
    atto_notfinite!(ctx, 1.0f32);
}

fn test_notfinite_finite_double(ctx: &mut TestContext) {
    atto_notfinite!(ctx, 1.0f64);
}

fn test_finite(ctx: &mut TestContext) {
    atto_finite!(ctx, 0.0f32);
    atto_finite!(ctx, -0.0f32);
    atto_finite!(ctx, 0.0f64);
    atto_finite!(ctx, -0.0f64);
    atto_finite!(ctx, 1.0f32);
    atto_finite!(ctx, 1.0f64);
    atto_finite!(ctx, -1.0f32);
    atto_finite!(ctx, -1.0f64);
}

fn test_finite_plusinf(ctx: &mut TestContext) {
    atto_finite!(ctx, f32::INFINITY);
}

fn test_finite_minusinf(ctx: &mut TestContext) {
    atto_finite!(ctx, f32::NEG_INFINITY);
}

fn test_finite_nan_const(ctx: &mut TestContext) {
    atto_finite!(ctx, f32::NAN);
}

fn test_finite_nan_computed_float(ctx: &mut TestContext) {
    atto_finite!(ctx, (-1.0f32).sqrt());
}

fn test_finite_nan_computed_double(ctx: &mut TestContext) {
    atto_finite!(ctx, (-1.0f64).sqrt());
}

fn test_flag(ctx: &mut TestContext) {
    atto_flag!(ctx, 1, 1);
    atto_flag!(ctx, 0xFF, 1);
    atto_flag!(ctx, 0xFF, 2);
    atto_flag!(ctx, 0xFF, 3);
    atto_flag!(ctx, 0xFF, 0x0F);
    atto_flag!(ctx, 0xFF, 0xFF);
    atto_flag!(ctx, 0x18, 0x08);
    atto_flag!(ctx, 0x18, 0x10);
    atto_flag!(ctx, 0x07, 1 << 1);
    atto_flag!(ctx, 0x07, 0x04);
    atto_flag!(ctx, 0x07, 0x06);
    atto_flag!(ctx, 0x07, 0xF0);
}

/// `atto_flag!` tests for presence; absence is `atto_noflag!` or `atto_eq!(flags, 0)`.
fn test_flag_when_none(ctx: &mut TestContext) {
    atto_flag!(ctx, 0, 0);
}

fn test_noflag(ctx: &mut TestContext) {
    atto_noflag!(ctx, 0, 1);
    atto_noflag!(ctx, 2, 1);
    atto_noflag!(ctx, 3, 8);
    atto_noflag!(ctx, 0x0F, 0xF0);
    atto_noflag!(ctx, 0xFF, 0);
    atto_noflag!(ctx, 0, 0);
    atto_noflag!(ctx, 0x07u32, 1u32 << 5);
    atto_noflag!(ctx, 0x07, 0xF8);
    atto_noflag!(ctx, 0x07, 0x04);
}

fn test_streq(ctx: &mut TestContext) {
    let a = b"hello\0";
    let b = b"hello\0";
    let c = b"HELLO\0";

    atto_streq!(ctx, a, b, 0);
    atto_streq!(ctx, a, b, 1);
    atto_streq!(ctx, a, b, 2);
    atto_streq!(ctx, a, b, 3);
    atto_streq!(ctx, a, b, 4);
    atto_streq!(ctx, a, b, 5);
    atto_eq!(ctx, a[5], b[5]);
    atto_streq!(ctx, a, b, 6);
    atto_streq!(ctx, "", "", 0);
    atto_streq!(ctx, a, c, 5);
}

fn test_memeq(ctx: &mut TestContext) {
    let a = [255u8; 5];
    let b = [255u8; 5];
    let c = [255u8, 255, 255, 255, 55];

    atto_memeq!(ctx, a, b, 0);
    atto_memeq!(ctx, a, b, 1);
    atto_memeq!(ctx, a, b, 2);
    atto_memeq!(ctx, a, b, 3);
    atto_memeq!(ctx, a, b, 4);
    atto_memeq!(ctx, a, b, 5);
    atto_memeq!(ctx, "", "", 0);
    atto_memeq!(ctx, "abcd", "abcd", 2);
    atto_memeq!(ctx, "abcd", "abcd", 4);
    atto_memeq!(ctx, c, a, 5);
}

fn test_memneq(ctx: &mut TestContext) {
    let a = [255u8; 5];
    let b = [255u8; 5];
    let c = [11u8, 22, 33, 44, 55];

    atto_memneq!(ctx, a, c, 1);
    atto_memneq!(ctx, a, c, 2);
    atto_memneq!(ctx, a, c, 3);
    atto_memneq!(ctx, a, c, 4);
    atto_memneq!(ctx, a, c, 5);
    atto_memneq!(ctx, "abcd", "ABcd", 2);
    atto_memneq!(ctx, "abcd", "ABcd", 4);
    atto_memneq!(ctx, "abcd", "abcD", 4);
    atto_memneq!(ctx, a, b, 5);
}

fn test_zeros(ctx: &mut TestContext) {
    let a = [0u8; 5];
    let b = [0u8, 0, 255, 255, 255];
    let words: Vec<u8> = [0u32; 3].iter().flat_map(|w| w.to_ne_bytes()).collect();

    atto_zeros!(ctx, a, 0);
    atto_zeros!(ctx, a, 1);
    atto_zeros!(ctx, a, 2);
    atto_zeros!(ctx, a, 3);
    atto_zeros!(ctx, a, 4);
    atto_zeros!(ctx, a, 5);
    atto_zeros!(ctx, b, 2);
    atto_zeros!(ctx, words, 3 * size_of::<u32>());
    atto_zeros!(ctx, "\0\0\0", 3);
    atto_zeros!(ctx, b, 5);
}

fn test_nzeros(ctx: &mut TestContext) {
    let a = [0u8; 5];
    let b = [0u8, 0, 255, 255, 255];
    let c = [11u8, 22, 33, 0, 0];

    atto_nzeros!(ctx, b, 3);
    atto_nzeros!(ctx, c, 3);
    atto_nzeros!(ctx, c, 4);
    atto_nzeros!(ctx, c, 5);
    atto_nzeros!(ctx, &c[2..], 1);
    atto_nzeros!(ctx, &c[2..], 2);
    atto_nzeros!(ctx, &c[2..], 3);
    atto_nzeros!(ctx, "\0\0c\0", 4);
    atto_nzeros!(ctx, "a\0c\0", 4);
    // A report mid-case must not disturb the counters.
    atto_report!(ctx);
    atto_nzeros!(ctx, a, 5);
}

fn test_fail(ctx: &mut TestContext) {
    atto_fail!(ctx);
}

fn test_at_the_end_some_tests_have_failed(ctx: &mut TestContext) {
    atto_eq!(ctx, ctx.any_failed(), true);
}
