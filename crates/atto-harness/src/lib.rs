//! Test harness for the Atto assertion engine.
//!
//! This crate provides:
//! - Test cases and suites: plain `fn(&mut TestContext)` functions, named after themselves
//! - Runner: sequential or partitioned-parallel execution with per-case results
//! - Reports: markdown + JSON run reports
//! - Structured log: JSONL records for every finished case and run
//! - Built-in suites: the library self-test and the demonstration program

#![forbid(unsafe_code)]

pub mod case;
pub mod error;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod suites;

pub use case::{TestCase, TestSuite};
pub use error::HarnessError;
pub use report::{RunReport, RunSummary};
pub use runner::{CaseResult, FailureRecord, TestRunner};
