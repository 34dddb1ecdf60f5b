//! Assertion macros.
//!
//! Every macro takes the [`TestContext`](crate::TestContext) first, as a
//! `&mut TestContext`. On failure it writes the `FAIL` line and `return`s
//! from the enclosing function, which must return `()` or
//! `Result<(), E>` with `E: From<AssertionFailed>`. Nothing after a
//! failing assertion in that function runs; the caller carries on.
//!
//! ```
//! use atto_core::{TestContext, atto_eq, atto_flag, atto_fapprox};
//!
//! fn test_case_flags(ctx: &mut TestContext) {
//!     let flags: u8 = 0x83;
//!     atto_flag!(ctx, flags, 0x01);
//!     atto_fapprox!(ctx, 1.000001f32, 1.0);
//!     atto_eq!(ctx, flags, 0x80); // fails, returns
//!     unreachable!();
//! }
//!
//! let mut ctx = TestContext::new().with_sink(atto_core::DiagnosticSink::Discard);
//! test_case_flags(&mut ctx);
//! assert_eq!(ctx.state().assertions_checked(), 3);
//! assert_eq!(ctx.exit_code(), 1);
//! ```

#[doc(hidden)]
pub mod __private {
    #[inline]
    pub fn bytes<T: AsRef<[u8]> + ?Sized>(value: &T) -> &[u8] {
        value.as_ref()
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __atto_check {
    ($ctx:expr, $kind:ident, $passed:expr, $text:expr) => {{
        let passed: bool = $passed;
        if let ::core::result::Result::Err(failure) = $crate::TestContext::check(
            $ctx,
            passed,
            $crate::CheckKind::$kind,
            $crate::atto_here!(),
            $text,
        ) {
            return $crate::CaseOutcome::from_failure(failure);
        }
    }};
}

/// Passes when the boolean expression is true.
#[macro_export]
macro_rules! atto_assert {
    ($ctx:expr, $e:expr $(,)?) => {
        $crate::__atto_check!($ctx, Assert, $e, ::core::stringify!($e))
    };
}

#[macro_export]
macro_rules! atto_true {
    ($ctx:expr, $e:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            True,
            $crate::check::equal(&($e), &true),
            ::core::stringify!($e)
        )
    };
}

#[macro_export]
macro_rules! atto_false {
    ($ctx:expr, $e:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            False,
            $crate::check::equal(&($e), &false),
            ::core::stringify!($e)
        )
    };
}

#[macro_export]
macro_rules! atto_eq {
    ($ctx:expr, $a:expr, $b:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            Eq,
            $crate::check::equal(&($a), &($b)),
            ::core::stringify!($a, $b)
        )
    };
}

#[macro_export]
macro_rules! atto_neq {
    ($ctx:expr, $a:expr, $b:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            Neq,
            $crate::check::not_equal(&($a), &($b)),
            ::core::stringify!($a, $b)
        )
    };
}

#[macro_export]
macro_rules! atto_gt {
    ($ctx:expr, $a:expr, $b:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            Gt,
            $crate::check::greater(&($a), &($b)),
            ::core::stringify!($a, $b)
        )
    };
}

#[macro_export]
macro_rules! atto_ge {
    ($ctx:expr, $a:expr, $b:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            Ge,
            $crate::check::greater_or_equal(&($a), &($b)),
            ::core::stringify!($a, $b)
        )
    };
}

#[macro_export]
macro_rules! atto_lt {
    ($ctx:expr, $a:expr, $b:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            Lt,
            $crate::check::less(&($a), &($b)),
            ::core::stringify!($a, $b)
        )
    };
}

#[macro_export]
macro_rules! atto_le {
    ($ctx:expr, $a:expr, $b:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            Le,
            $crate::check::less_or_equal(&($a), &($b)),
            ::core::stringify!($a, $b)
        )
    };
}

/// `|a - b| <= float tolerance`, both operands converted with `as f32`.
#[macro_export]
macro_rules! atto_fapprox {
    ($ctx:expr, $a:expr, $b:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            FloatApprox,
            $crate::check::approx_equal(
                ($a) as f32,
                ($b) as f32,
                $crate::TestContext::tolerances(&*$ctx).float_abstol,
            ),
            ::core::stringify!($a, $b)
        )
    };
}

/// `|a - b| <= double tolerance`, both operands converted with `as f64`.
#[macro_export]
macro_rules! atto_dapprox {
    ($ctx:expr, $a:expr, $b:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            DoubleApprox,
            $crate::check::approx_equal(
                ($a) as f64,
                ($b) as f64,
                $crate::TestContext::tolerances(&*$ctx).double_abstol,
            ),
            ::core::stringify!($a, $b)
        )
    };
}

/// `|a - b| <= |delta|` in single precision.
#[macro_export]
macro_rules! atto_fdelta {
    ($ctx:expr, $a:expr, $b:expr, $delta:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            FloatDelta,
            $crate::check::within_delta(($a) as f32, ($b) as f32, ($delta) as f32),
            ::core::stringify!($a, $b, $delta)
        )
    };
}

/// `|a - b| <= |delta|` in double precision.
#[macro_export]
macro_rules! atto_ddelta {
    ($ctx:expr, $a:expr, $b:expr, $delta:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            DoubleDelta,
            $crate::check::within_delta(($a) as f64, ($b) as f64, ($delta) as f64),
            ::core::stringify!($a, $b, $delta)
        )
    };
}

#[macro_export]
macro_rules! atto_nan {
    ($ctx:expr, $x:expr $(,)?) => {
        $crate::__atto_check!($ctx, Nan, $crate::check::is_nan($x), ::core::stringify!($x))
    };
}

/// Infinite of either sign.
#[macro_export]
macro_rules! atto_inf {
    ($ctx:expr, $x:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            Inf,
            $crate::check::is_infinite($x),
            ::core::stringify!($x)
        )
    };
}

#[macro_export]
macro_rules! atto_plusinf {
    ($ctx:expr, $x:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            PlusInf,
            $crate::check::is_plus_infinity($x),
            ::core::stringify!($x)
        )
    };
}

#[macro_export]
macro_rules! atto_minusinf {
    ($ctx:expr, $x:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            MinusInf,
            $crate::check::is_minus_infinity($x),
            ::core::stringify!($x)
        )
    };
}

#[macro_export]
macro_rules! atto_finite {
    ($ctx:expr, $x:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            Finite,
            $crate::check::is_finite($x),
            ::core::stringify!($x)
        )
    };
}

/// Infinite or NaN.
#[macro_export]
macro_rules! atto_notfinite {
    ($ctx:expr, $x:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            NotFinite,
            $crate::check::is_not_finite($x),
            ::core::stringify!($x)
        )
    };
}

/// `(value & mask) != 0`. A zero mask always fails.
#[macro_export]
macro_rules! atto_flag {
    ($ctx:expr, $value:expr, $mask:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            Flag,
            $crate::check::flag_set($value, $mask),
            ::core::stringify!($value, $mask)
        )
    };
}

/// `(value & mask) == 0`. A zero mask always passes.
#[macro_export]
macro_rules! atto_noflag {
    ($ctx:expr, $value:expr, $mask:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            NoFlag,
            $crate::check::flag_not_set($value, $mask),
            ::core::stringify!($value, $mask)
        )
    };
}

/// `strncmp(a, b, maxlen) == 0` over anything that is `AsRef<[u8]>`.
#[macro_export]
macro_rules! atto_streq {
    ($ctx:expr, $a:expr, $b:expr, $maxlen:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            StrEq,
            $crate::check::str_equal_prefix(
                $crate::macros::__private::bytes(&($a)),
                $crate::macros::__private::bytes(&($b)),
                ($maxlen) as usize,
            ),
            ::core::stringify!($a, $b, $maxlen)
        )
    };
}

#[macro_export]
macro_rules! atto_memeq {
    ($ctx:expr, $a:expr, $b:expr, $len:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            MemEq,
            $crate::check::mem_equal(
                $crate::macros::__private::bytes(&($a)),
                $crate::macros::__private::bytes(&($b)),
                ($len) as usize,
            ),
            ::core::stringify!($a, $b, $len)
        )
    };
}

#[macro_export]
macro_rules! atto_memneq {
    ($ctx:expr, $a:expr, $b:expr, $len:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            MemNeq,
            $crate::check::mem_not_equal(
                $crate::macros::__private::bytes(&($a)),
                $crate::macros::__private::bytes(&($b)),
                ($len) as usize,
            ),
            ::core::stringify!($a, $b, $len)
        )
    };
}

/// Every one of the first `len` bytes is zero.
#[macro_export]
macro_rules! atto_zeros {
    ($ctx:expr, $bytes:expr, $len:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            Zeros,
            $crate::check::all_zero($crate::macros::__private::bytes(&($bytes)), ($len) as usize),
            ::core::stringify!($bytes, $len)
        )
    };
}

/// At least one of the first `len` bytes is non-zero.
#[macro_export]
macro_rules! atto_nzeros {
    ($ctx:expr, $bytes:expr, $len:expr $(,)?) => {
        $crate::__atto_check!(
            $ctx,
            NotZeros,
            $crate::check::not_all_zero(
                $crate::macros::__private::bytes(&($bytes)),
                ($len) as usize,
            ),
            ::core::stringify!($bytes, $len)
        )
    };
}

/// Unconditional failure.
#[macro_export]
macro_rules! atto_fail {
    ($ctx:expr $(,)?) => {
        $crate::__atto_check!($ctx, Fail, false, "")
    };
}

/// Write a `REPORT` line with the current counters; evaluates to the
/// [`TestRunState`](crate::TestRunState) snapshot.
#[macro_export]
macro_rules! atto_report {
    ($ctx:expr $(,)?) => {
        $crate::TestContext::report(&*$ctx, $crate::atto_here!())
    };
}
