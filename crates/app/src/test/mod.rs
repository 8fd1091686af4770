//! Test support.

mod clock;

pub(crate) use clock::ManualClock;
