//! Wall-clock source.

use jiff::Timestamp;

/// Source of the current time for services that stamp or age records.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
