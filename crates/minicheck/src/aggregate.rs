//! Pass/fail aggregation and the process-wide reporting singleton.
//!
//! Every check writes one full line to the sink while it happens; counters
//! are atomic and monotonically non-decreasing, with no reset operation. The
//! process singleton prints a summary block exactly once at normal exit.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::equality::CheckEq;
use crate::render::Render;
use crate::shutdown;

/// Snapshot of the aggregate counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    /// Checks recorded so far.
    pub executed: u64,
    /// Checks that failed.
    pub failed: u64,
}

/// Accumulates check outcomes and writes one line per check to its sink.
pub struct Aggregator {
    total: AtomicU64,
    failed: AtomicU64,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Aggregator {
    /// Aggregator writing to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Box::new(io::stdout()))
    }

    /// Aggregator writing to an arbitrary sink. Tests use this to capture
    /// the exact output lines.
    #[must_use]
    pub fn with_sink(sink: Box<dyn Write + Send>) -> Self {
        Self {
            total: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            sink: Mutex::new(sink),
        }
    }

    /// Compare `actual` against `expected`, print the outcome, and count it.
    pub fn check<T: CheckEq + Render>(&self, expected: &T, actual: &T) -> bool {
        self.record(expected, actual, None)
    }

    /// Like [`Aggregator::check`], with a caller-supplied label appended to
    /// the printed line.
    pub fn check_labeled<T: CheckEq + Render>(
        &self,
        expected: &T,
        actual: &T,
        label: &str,
    ) -> bool {
        self.record(expected, actual, Some(label))
    }

    fn record<T: CheckEq + Render>(&self, expected: &T, actual: &T, label: Option<&str>) -> bool {
        let passed = expected.check_eq(actual);
        // `total` is bumped before `failed`; paired with the read order in
        // `counts`, observers never see `failed > executed`.
        self.total.fetch_add(1, Ordering::Relaxed);
        if !passed {
            self.failed.fetch_add(1, Ordering::Release);
        }

        let suffix = match label {
            Some(label) => format!(" [{label}]"),
            None => String::new(),
        };
        let line = if passed {
            format!(
                "Test successful! Expected value == actual value (={}){suffix}",
                expected.render()
            )
        } else {
            format!(
                "Error in test: expected value {}, but actual value was {}{suffix}",
                expected.render(),
                actual.render()
            )
        };

        // The critical section is exactly one full message.
        let mut sink = self.sink.lock();
        let _ = writeln!(sink, "{line}");

        passed
    }

    /// Number of checks recorded.
    #[must_use]
    pub fn executed(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Number of failed checks.
    #[must_use]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Snapshot of both counters. `failed` is read first, so
    /// `failed <= executed` holds even while other threads are recording.
    #[must_use]
    pub fn counts(&self) -> Counts {
        let failed = self.failed.load(Ordering::Acquire);
        let executed = self.total.load(Ordering::Acquire);
        Counts { executed, failed }
    }

    /// Write the end-of-run summary block to the sink.
    pub fn print_summary(&self) {
        let Counts { executed, failed } = self.counts();
        let mut sink = self.sink.lock();
        let _ = writeln!(sink, "\n--------------------------------------");
        let _ = writeln!(sink, "Test summary:");
        let _ = writeln!(sink, "Executed tests: {executed}");
        let _ = writeln!(sink, "Failed tests: {failed}");
        let _ = sink.flush();
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<Aggregator> = OnceLock::new();

/// The process-wide aggregator, created lazily. The first access registers a
/// process-exit finalizer that prints the summary exactly once, after all
/// other use, on normal termination.
pub fn global() -> &'static Aggregator {
    GLOBAL.get_or_init(|| {
        shutdown::on_process_exit(summary_at_exit);
        Aggregator::new()
    })
}

extern "C" fn summary_at_exit() {
    // Runs inside libc's exit sequence; must not unwind.
    if let Some(aggregator) = GLOBAL.get() {
        aggregator.print_summary();
    }
}
