//! The clock port — monotonically non-decreasing protocol time.

use patron_types::Timestamp;

/// Source of current time for the engines.
///
/// Implementations must be non-decreasing: two consecutive calls never go
/// backwards.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Wall-clock implementation backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
