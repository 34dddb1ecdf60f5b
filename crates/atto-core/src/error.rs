//! The single failure taxonomy of the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::location::Location;

/// Which assertion produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Assert,
    True,
    False,
    Eq,
    Neq,
    Gt,
    Ge,
    Lt,
    Le,
    FloatApprox,
    DoubleApprox,
    FloatDelta,
    DoubleDelta,
    Nan,
    Inf,
    PlusInf,
    MinusInf,
    Finite,
    NotFinite,
    Flag,
    NoFlag,
    StrEq,
    MemEq,
    MemNeq,
    Zeros,
    NotZeros,
    Fail,
}

impl CheckKind {
    pub const ALL: [CheckKind; 27] = [
        Self::Assert,
        Self::True,
        Self::False,
        Self::Eq,
        Self::Neq,
        Self::Gt,
        Self::Ge,
        Self::Lt,
        Self::Le,
        Self::FloatApprox,
        Self::DoubleApprox,
        Self::FloatDelta,
        Self::DoubleDelta,
        Self::Nan,
        Self::Inf,
        Self::PlusInf,
        Self::MinusInf,
        Self::Finite,
        Self::NotFinite,
        Self::Flag,
        Self::NoFlag,
        Self::StrEq,
        Self::MemEq,
        Self::MemNeq,
        Self::Zeros,
        Self::NotZeros,
        Self::Fail,
    ];

    /// Name of the macro that evaluates this kind, without the `!`.
    #[must_use]
    pub const fn macro_name(self) -> &'static str {
        match self {
            Self::Assert => "atto_assert",
            Self::True => "atto_true",
            Self::False => "atto_false",
            Self::Eq => "atto_eq",
            Self::Neq => "atto_neq",
            Self::Gt => "atto_gt",
            Self::Ge => "atto_ge",
            Self::Lt => "atto_lt",
            Self::Le => "atto_le",
            Self::FloatApprox => "atto_fapprox",
            Self::DoubleApprox => "atto_dapprox",
            Self::FloatDelta => "atto_fdelta",
            Self::DoubleDelta => "atto_ddelta",
            Self::Nan => "atto_nan",
            Self::Inf => "atto_inf",
            Self::PlusInf => "atto_plusinf",
            Self::MinusInf => "atto_minusinf",
            Self::Finite => "atto_finite",
            Self::NotFinite => "atto_notfinite",
            Self::Flag => "atto_flag",
            Self::NoFlag => "atto_noflag",
            Self::StrEq => "atto_streq",
            Self::MemEq => "atto_memeq",
            Self::MemNeq => "atto_memneq",
            Self::Zeros => "atto_zeros",
            Self::NotZeros => "atto_nzeros",
            Self::Fail => "atto_fail",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.macro_name())
    }
}

/// A failed assertion.
///
/// Displays as the canonical diagnostic line
/// `FAIL | File: <file> | Line: <line> | Test case: <name>`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("FAIL | {location}")]
pub struct AssertionFailed {
    pub location: Location,
    pub kind: CheckKind,
    /// Source text of the macro arguments.
    pub expression: &'static str,
}

/// Return type of a test case that assertion macros can bail out of.
///
/// Implemented for `()` and for `Result<(), E>` where `E` can absorb an
/// [`AssertionFailed`]; the failing macro `return`s the produced value.
pub trait CaseOutcome {
    fn from_failure(failure: AssertionFailed) -> Self;
}

impl CaseOutcome for () {
    #[inline]
    fn from_failure(_failure: AssertionFailed) -> Self {}
}

impl<E: From<AssertionFailed>> CaseOutcome for Result<(), E> {
    #[inline]
    fn from_failure(failure: AssertionFailed) -> Self {
        Err(E::from(failure))
    }
}
