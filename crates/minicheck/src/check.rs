//! Public check surface used by test code.
//!
//! Every call synchronously prints one outcome line and mutates the
//! process-wide counters. Failures never propagate to the caller; the
//! underlying boolean outcome stays available on [`Aggregator::check`]
//! for richer wrappers.
//!
//! [`Aggregator::check`]: crate::aggregate::Aggregator::check

use crate::aggregate;
use crate::equality::CheckEq;
use crate::render::Render;

/// Check `actual` against `expected`.
///
/// `expected` may be any type that converts losslessly into the type of
/// `actual`: an integer expected value widens to a floating-point actual
/// value, while the narrowing direction has no conversion and does not
/// compile.
pub fn check<A, E>(actual: A, expected: E)
where
    A: CheckEq + Render,
    E: Into<A>,
{
    let _ = aggregate::global().check(&expected.into(), &actual);
}

/// Check with a caller-supplied label appended to the printed line.
pub fn check_labeled<A, E>(actual: A, expected: E, label: &str)
where
    A: CheckEq + Render,
    E: Into<A>,
{
    let _ = aggregate::global().check_labeled(&expected.into(), &actual, label);
}

/// Check that `actual` is true.
///
/// This is the seam for wrappers that reduce a richer observation (such as
/// "did this throw as expected") to a single boolean.
pub fn check_true(actual: bool) {
    check(actual, true);
}
