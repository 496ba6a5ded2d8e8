//! Time sources used to stamp trades and anchor the VWSP window.

use std::sync::{Arc, Mutex};

use time::Duration;

use crate::UtcDateTime;

/// Supplies "now" to the ledger.
pub trait Clock: Send + Sync {
    fn now(&self) -> UtcDateTime;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> UtcDateTime {
        UtcDateTime::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<UtcDateTime>,
}

impl ManualClock {
    pub fn new(start: UtcDateTime) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    pub fn set(&self, at: UtcDateTime) {
        let mut current = self
            .current
            .lock()
            .expect("manual clock lock is not poisoned");
        *current = at;
    }

    /// Moves the clock by `by`; a negative duration moves it backwards.
    pub fn advance(&self, by: Duration) {
        let mut current = self
            .current
            .lock()
            .expect("manual clock lock is not poisoned");
        if let Some(next) = current.checked_add(by) {
            *current = next;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> UtcDateTime {
        *self
            .current
            .lock()
            .expect("manual clock lock is not poisoned")
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> UtcDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> UtcDateTime {
        (**self).now()
    }
}
