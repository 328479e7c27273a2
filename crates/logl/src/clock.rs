//! crates/logl/src/clock.rs
//! Timestamp providers.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the timestamp printed on each emitted line.
///
/// The logger only calls [`now`](Self::now) for events that pass the filter.
/// Monotonicity is not required.
pub trait Clock {
    /// Returns the current time as an integer count since some epoch.
    fn now(&self) -> u64;
}

/// Wall clock reporting whole seconds since the Unix epoch.
///
/// A system clock set before 1970 reads as zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    }
}

/// Clock that always reports the same instant.
///
/// Useful for reproducible output in tests and documentation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

impl<C> Clock for &C
where
    C: Clock + ?Sized,
{
    fn now(&self) -> u64 {
        (**self).now()
    }
}

impl<C> Clock for Arc<C>
where
    C: Clock + ?Sized,
{
    fn now(&self) -> u64 {
        (**self).now()
    }
}

impl<C> Clock for Box<C>
where
    C: Clock + ?Sized,
{
    fn now(&self) -> u64 {
        (**self).now()
    }
}
