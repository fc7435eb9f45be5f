//! Per-type live-instance counting for leak and lifetime auditing.
//!
//! Counters are keyed by type identity in a process-wide registry, created
//! lazily on first use and reported per type at normal process exit. Counts
//! for distinct types never interfere.

use std::any::TypeId;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::shutdown;

/// Live/total counters for one tracked type.
///
/// `live` is signed: a manual decrement without a matching increment (a
/// caller lifecycle bug) drives it negative, and the negative value is
/// reported as-is rather than clamped.
#[derive(Debug)]
pub struct TypeCounters {
    name: &'static str,
    live: AtomicI64,
    total: AtomicU64,
}

impl TypeCounters {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            live: AtomicI64::new(0),
            total: AtomicU64::new(0),
        }
    }

    /// Type name as reported in the shutdown summary.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Currently live instances.
    #[must_use]
    pub fn live(&self) -> i64 {
        self.live.load(Ordering::Relaxed)
    }

    /// Instances ever constructed.
    #[must_use]
    pub fn total_created(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Count one construction. Fresh constructions and clones alike are new
    /// live instances.
    pub fn record_construction(&self) {
        self.live.fetch_add(1, Ordering::Relaxed);
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one destruction.
    pub fn record_destruction(&self) {
        self.live.fetch_sub(1, Ordering::Relaxed);
    }

    /// Write this type's shutdown report to `out`: the remaining live count,
    /// a `(NOT zero!)` marker when instances are still live, and the total
    /// ever created.
    pub fn write_summary(&self, out: &mut dyn Write) {
        let live = self.live();
        let _ = write!(
            out,
            "The remaining number of objects of type {} at the end of the program is {live}",
            self.name
        );
        if live > 0 {
            let _ = write!(out, " (NOT zero!)");
        }
        let _ = writeln!(
            out,
            "\nThe total number of objects created was {}",
            self.total_created()
        );
    }
}

/// Registry of all tracked types, in first-use order.
static TRACKED: OnceLock<RwLock<Vec<(TypeId, &'static TypeCounters)>>> = OnceLock::new();

fn tracked() -> &'static RwLock<Vec<(TypeId, &'static TypeCounters)>> {
    TRACKED.get_or_init(|| {
        shutdown::on_process_exit(summaries_at_exit);
        RwLock::new(Vec::new())
    })
}

fn lookup(
    entries: &[(TypeId, &'static TypeCounters)],
    id: TypeId,
) -> Option<&'static TypeCounters> {
    entries.iter().find(|entry| entry.0 == id).map(|entry| entry.1)
}

/// Counters for type `T`, created and registered on first use.
#[must_use]
pub fn counters_for<T: 'static>() -> &'static TypeCounters {
    let id = TypeId::of::<T>();
    let registry = tracked();
    if let Some(counters) = lookup(&registry.read(), id) {
        return counters;
    }
    let mut entries = registry.write();
    // Another thread may have registered T between the locks.
    if let Some(counters) = lookup(&entries, id) {
        return counters;
    }
    let counters: &'static TypeCounters =
        Box::leak(Box::new(TypeCounters::new(std::any::type_name::<T>())));
    entries.push((id, counters));
    counters
}

extern "C" fn summaries_at_exit() {
    // Runs inside libc's exit sequence; must not unwind. Reverse first-use
    // order, matching the LIFO finalizer convention.
    if let Some(registry) = TRACKED.get() {
        let entries = registry.read();
        let mut out = io::stdout();
        for (_, counters) in entries.iter().rev() {
            counters.write_summary(&mut out);
        }
        let _ = out.flush();
    }
}

/// Wrapper that opts a value into instance counting for its inner type.
///
/// Construction and cloning each count one new live instance of `T`;
/// dropping counts one destruction. A move is neither, so values that move
/// frequently cannot skew the counts.
#[derive(Debug)]
pub struct Tracked<T: 'static> {
    value: T,
}

impl<T: 'static> Tracked<T> {
    /// Wrap `value`, counting one construction of `T`.
    #[must_use]
    pub fn new(value: T) -> Self {
        counters_for::<T>().record_construction();
        Self { value }
    }
}

impl<T: Clone + 'static> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        counters_for::<T>().record_construction();
        Self {
            value: self.value.clone(),
        }
    }
}

impl<T: 'static> Drop for Tracked<T> {
    fn drop(&mut self) {
        counters_for::<T>().record_destruction();
    }
}

impl<T: 'static> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: 'static> DerefMut for Tracked<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}
