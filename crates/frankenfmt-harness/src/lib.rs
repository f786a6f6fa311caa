//! Conformance testing harness for frankenfmt.
//!
//! This crate provides:
//! - Fixtures: format strings with their expected directives and argument types
//! - Verification: run the parser over fixtures and diff the outcome
//! - Report generation: human-readable + machine-readable conformance reports
//! - Structured logging: JSONL records for every verified case

#![forbid(unsafe_code)]

pub mod diff;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use fixtures::{Expected, FixtureCase, FixtureError, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
