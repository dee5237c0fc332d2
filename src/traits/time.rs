//! Time abstraction traits for platform-agnostic timing operations.
//!
//! This module provides the `TimeSource` trait that abstracts over different
//! time providers (board timer, mock, etc.) so that freshness windows can be
//! tested on host without embedded dependencies.

use core::cell::Cell;

/// Platform-agnostic monotonic time source.
///
/// The mailbox stamps every inbound report with `now_ms()` and compares ages
/// against its freshness windows, so implementations must never go backwards.
///
/// # Example
///
/// ```
/// use tracker_bridge::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// let stamped = time.now_ms();
/// time.advance_ms(250);
/// assert_eq!(time.elapsed_ms_since(stamped), 250);
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Returns current time in milliseconds since system start.
    fn now_ms(&self) -> u64;

    /// Returns current time in microseconds since system start.
    fn now_us(&self) -> u64;

    /// Returns elapsed milliseconds since a reference point.
    ///
    /// Uses saturating subtraction so a reference in the future reads as zero.
    fn elapsed_ms_since(&self, reference_ms: u64) -> u64 {
        self.now_ms().saturating_sub(reference_ms)
    }
}

impl<T: TimeSource> TimeSource for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source for testing with controllable time advancement.
///
/// Share one instance by reference (`&MockTime` is itself a `TimeSource`) so
/// that the test and the component under test observe the same clock.
#[derive(Clone, Default)]
pub struct MockTime {
    current_us: Cell<u64>,
}

// Safety: MockTime is only used in single-threaded test contexts
// where Cell is safe. The Send+Sync bounds on TimeSource trait
// are required for embedded contexts, but MockTime is not used there.
unsafe impl Send for MockTime {}
unsafe impl Sync for MockTime {}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub const fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the specified time in milliseconds.
    pub const fn with_initial_ms(ms: u64) -> Self {
        Self {
            current_us: Cell::new(ms * 1000),
        }
    }

    /// Sets the current time to an absolute value in milliseconds.
    pub fn set_ms(&self, ms: u64) {
        self.current_us.set(ms * 1000);
    }

    /// Advances the current time by the specified number of milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.current_us.set(self.current_us.get() + ms * 1000);
    }

    /// Advances the current time by the specified number of microseconds.
    pub fn advance_us(&self, us: u64) {
        self.current_us.set(self.current_us.get() + us);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_us.get() / 1000
    }

    fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}
