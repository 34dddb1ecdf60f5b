//! # atto-core
//!
//! A microscopic unit-testing assertion engine.
//!
//! This crate provides:
//! - Check predicates: equality, ordering, float tolerance, IEEE-754
//!   classification, bit flags, string prefixes, memory and zero-fill.
//! - [`TestContext`]: run counters, tolerances and the diagnostic sink.
//! - `atto_*!` macros: evaluate a check and, on failure, print
//!   `FAIL | File: .. | Line: .. | Test case: ..` and return from the
//!   enclosing test case.
//!
//! A run is tainted by its first failure and stays tainted; the embedding
//! program exits with [`TestContext::exit_code`].

#![forbid(unsafe_code)]

pub mod check;
pub mod config;
pub mod context;
pub mod error;
pub mod location;
pub mod macros;
pub mod sink;
pub mod state;

pub use config::{Config, ConfigError, DOUBLE_EQ_ABSTOL, FLOAT_EQ_ABSTOL, Tolerances};
pub use context::TestContext;
pub use error::{AssertionFailed, CaseOutcome, CheckKind};
pub use location::Location;
pub use sink::{DiagnosticSink, SharedBuffer};
pub use state::{RunPhase, TestRunState};
