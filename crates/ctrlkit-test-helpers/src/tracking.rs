//! Allocation tracking for RT safety tests.
//!
//! A control tick (`Filter::update`, a PID `update`) must never touch the
//! heap. Test binaries install [`TrackingAllocator`] as their global
//! allocator and wrap the tick in an [`AllocationGuard`]:
//!
//! ```rust,ignore
//! use ctrlkit_test_helpers::tracking::{TrackingAllocator, track};
//! use ctrlkit_test_helpers::assert_rt_safe;
//!
//! #[global_allocator]
//! static GLOBAL: TrackingAllocator = TrackingAllocator;
//!
//! let guard = track();
//! controller.update(feedback);
//! assert_rt_safe!(guard, "PositionalPid::update");
//! ```
//!
//! Counters are thread-local, so tests running in parallel on other threads
//! do not pollute each other's counts.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static ALLOCATION_COUNT: Cell<usize> = const { Cell::new(0) };
    static ALLOCATION_BYTES: Cell<usize> = const { Cell::new(0) };
    static TRACKING_DEPTH: Cell<usize> = const { Cell::new(0) };
}

fn tracking_enabled() -> bool {
    TRACKING_DEPTH.with(|depth| depth.get() > 0)
}

fn record(bytes: usize) {
    ALLOCATION_COUNT.with(|count| count.set(count.get().saturating_add(1)));
    ALLOCATION_BYTES.with(|total| total.set(total.get().saturating_add(bytes)));
}

/// Global allocator that forwards to [`System`] and counts allocations made
/// while an [`AllocationGuard`] is alive on the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingAllocator;

// SAFETY: every call forwards to `System` with the caller's arguments
// unchanged; bookkeeping only touches const-initialized thread-locals, which
// never allocate.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded verbatim, caller upholds `GlobalAlloc::alloc`'s contract.
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() && tracking_enabled() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded verbatim, caller upholds `GlobalAlloc::alloc_zeroed`'s contract.
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() && tracking_enabled() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: `ptr` was produced by this allocator, which always delegates to `System`.
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: `ptr` was produced by this allocator, which always delegates to `System`.
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() && tracking_enabled() {
            record(new_size.saturating_sub(layout.size()));
        }
        new_ptr
    }
}

/// Scope during which allocations on the current thread are counted.
///
/// Guards nest: tracking stays on until the outermost guard is dropped.
#[derive(Debug)]
pub struct AllocationGuard {
    start_count: usize,
    start_bytes: usize,
}

impl AllocationGuard {
    /// Start counting from the current totals.
    pub fn new() -> Self {
        TRACKING_DEPTH.with(|depth| depth.set(depth.get().saturating_add(1)));
        Self {
            start_count: ALLOCATION_COUNT.with(Cell::get),
            start_bytes: ALLOCATION_BYTES.with(Cell::get),
        }
    }

    /// Allocations since the guard was created.
    pub fn allocations(&self) -> usize {
        ALLOCATION_COUNT
            .with(Cell::get)
            .saturating_sub(self.start_count)
    }

    /// Bytes requested since the guard was created.
    pub fn bytes(&self) -> usize {
        ALLOCATION_BYTES
            .with(Cell::get)
            .saturating_sub(self.start_bytes)
    }

    /// Whether anything was allocated under this guard.
    pub fn has_allocations(&self) -> bool {
        self.allocations() > 0
    }

    /// Snapshot the counts into a report labelled `context`.
    pub fn report(&self, context: impl Into<String>) -> AllocationReport {
        AllocationReport {
            allocations: self.allocations(),
            bytes: self.bytes(),
            context: context.into(),
        }
    }
}

impl Default for AllocationGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AllocationGuard {
    fn drop(&mut self) {
        TRACKING_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Start tracking allocations on the current thread.
pub fn track() -> AllocationGuard {
    AllocationGuard::new()
}

/// Run `f` under a fresh guard and return its result with the report.
pub fn measure<R>(context: &str, f: impl FnOnce() -> R) -> (R, AllocationReport) {
    let guard = track();
    let result = f();
    let report = guard.report(context);
    (result, report)
}

/// Panic if the guard saw any allocation.
#[macro_export]
macro_rules! assert_rt_safe {
    ($guard:expr) => {
        $crate::assert_rt_safe!($guard, "tracked scope")
    };
    ($guard:expr, $context:expr) => {{
        let guard = &$guard;
        let allocs = guard.allocations();
        if allocs > 0 {
            panic!(
                "RT path allocation violation in '{}': {} allocations ({} bytes) at {}:{}",
                $context,
                allocs,
                guard.bytes(),
                file!(),
                line!()
            );
        }
    }};
}

/// Allocation counts for one measured scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationReport {
    /// Number of allocations
    pub allocations: usize,
    /// Bytes requested
    pub bytes: usize,
    /// What was measured
    pub context: String,
}

impl AllocationReport {
    /// Panic unless nothing was allocated.
    ///
    /// # Panics
    ///
    /// Panics when `allocations > 0`.
    #[track_caller]
    pub fn assert_zero(&self) -> &Self {
        if self.allocations > 0 {
            panic!(
                "Allocation violation in '{}': {} allocations ({} bytes)",
                self.context, self.allocations, self.bytes
            );
        }
        self
    }

    /// Whether nothing was allocated.
    pub fn is_zero(&self) -> bool {
        self.allocations == 0
    }
}

impl std::fmt::Display for AllocationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.allocations > 0 {
            write!(
                f,
                "{}: {} allocations ({} bytes)",
                self.context, self.allocations, self.bytes
            )
        } else {
            write!(f, "{}: zero allocations", self.context)
        }
    }
}
