//! # minicheck
//!
//! A minimal, embeddable check-and-report core for ad-hoc test code.
//!
//! This crate provides:
//! - [`check()`] / [`check_true`] / [`check_labeled`]: compare an actual value
//!   against an expected one, print the outcome immediately, and count it in
//!   a process-wide aggregator.
//! - A pass/fail summary printed exactly once at normal process exit, with no
//!   explicit teardown call.
//! - [`Tracked`] / [`counters_for`]: per-type live-instance counting for leak
//!   and lifetime auditing, reported per type at process exit.
//! - [`register_block`] / [`run_blocks`]: named test blocks collected during
//!   startup and run once, in insertion order, before the main body.
//!
//! Floating-point values compare within a tolerance of [`EPSILON`]; all other
//! supported types compare exactly. Checks never abort the process: failures
//! are printed and counted, and a caller that wants a failing exit code can
//! inspect the failure count on [`global`] itself.
//!
//! Each process keeps its own counters and prints its own report; nothing is
//! aggregated across processes.
//!
//! ```
//! minicheck::check(1, 1);
//! minicheck::check(String::from("Hi"), "Hi");
//! minicheck::check_true(2 + 2 == 4);
//! ```

pub mod aggregate;
pub mod check;
pub mod equality;
pub mod instance;
pub mod registry;
pub mod render;
#[allow(unsafe_code)]
mod shutdown;

pub use aggregate::{Aggregator, Counts, global};
pub use check::{check, check_labeled, check_true};
pub use equality::{CheckEq, EPSILON};
pub use instance::{Tracked, TypeCounters, counters_for};
pub use registry::{BlockError, register_block, run_blocks};
pub use render::Render;
