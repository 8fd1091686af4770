//! Manually advanced clock for time-dependent service tests.

use std::sync::Mutex;

use jiff::{SignedDuration, Timestamp};

use crate::clock::Clock;

#[derive(Debug)]
pub(crate) struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    pub(crate) fn starting_at(now: Timestamp) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub(crate) fn advance(&self, by: SignedDuration) -> Result<(), jiff::Error> {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        *now = now.checked_add(by)?;

        Ok(())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
