use std::time::{Duration, Instant};

/// Trailing-edge debouncer driven by an external clock.
///
/// Each `schedule` replaces whatever was pending, so a burst of calls yields one
/// value, the last one, once `delay` has passed since the final call.
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    due: Instant,
    value: T,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            due: now + self.delay,
            value,
        });
    }

    /// Drops the pending value without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due)
    }

    /// Returns the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|pending| pending.due <= now) {
            self.pending.take().map(|pending| pending.value)
        } else {
            None
        }
    }
}
