//! Time sources and deadline helpers.
//!
//! Nothing here sleeps or spawns: deadlines are armed against an injected
//! [`Clock`] and polled from the host's tick, so tests can drive time by hand.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Trailing debounce: every `arm` pushes the deadline out to `now + delay`.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` exactly once per armed deadline, when it has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// A value that may clear itself once its deadline passes.
#[derive(Debug, Clone)]
pub struct Transient<T> {
    value: Option<T>,
    expires_at: Option<Instant>,
}

impl<T> Transient<T> {
    pub fn empty() -> Self {
        Self {
            value: None,
            expires_at: None,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Shows `value` until `now + ttl`.
    pub fn show_for(&mut self, value: T, now: Instant, ttl: Duration) {
        self.value = Some(value);
        self.expires_at = Some(now + ttl);
    }

    /// Shows `value` until it is replaced or cleared.
    pub fn show(&mut self, value: T) {
        self.value = Some(value);
        self.expires_at = None;
    }

    pub fn clear(&mut self) -> bool {
        self.expires_at = None;
        self.value.take().is_some()
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.expires_at {
            Some(at) if now >= at => self.clear(),
            _ => false,
        }
    }
}

impl<T> Default for Transient<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/scheduler.rs"]
mod tests;
