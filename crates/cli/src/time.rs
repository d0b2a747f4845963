// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time abstraction for deterministic testing.
//!
//! Sessions pace themselves with fixed sleeps. This module provides a `Clock`
//! trait and a `FakeClock` implementation that lets tests observe those pauses
//! without waiting for them.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Clock trait for time abstraction
pub trait Clock: Send + Sync {
    /// Block the current thread for a duration
    fn sleep(&self, duration: Duration);
}

/// Real clock using the OS scheduler
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Fake clock for testing that records sleeps instead of performing them
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    /// Total time slept in milliseconds
    slept_millis: Arc<AtomicU64>,

    /// Every requested sleep, in order
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl FakeClock {
    /// Create a new fake clock with nothing slept
    pub fn new() -> Self {
        Self::default()
    }

    /// Total time requested through `sleep`
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.slept_millis.load(Ordering::SeqCst))
    }

    /// Every requested sleep, including zero-length ones
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().clone()
    }

    /// Number of `sleep` calls so far
    pub fn sleep_count(&self) -> usize {
        self.sleeps.lock().len()
    }
}

impl Clock for FakeClock {
    fn sleep(&self, duration: Duration) {
        self.slept_millis
            .fetch_add(duration.as_millis() as u64, Ordering::SeqCst);
        self.sleeps.lock().push(duration);
    }
}

/// Clock handle that can be either real or fake
#[derive(Clone, Debug)]
pub enum ClockHandle {
    System(SystemClock),
    Fake(FakeClock),
}

impl ClockHandle {
    /// Create a system clock handle
    pub fn system() -> Self {
        Self::System(SystemClock)
    }

    /// Create a fake clock handle
    pub fn fake() -> Self {
        Self::Fake(FakeClock::new())
    }

    /// Get as fake clock for inspection (returns None for system clock)
    pub fn as_fake(&self) -> Option<&FakeClock> {
        match self {
            Self::Fake(f) => Some(f),
            Self::System(_) => None,
        }
    }

    /// Check if this is a fake clock
    pub fn is_fake(&self) -> bool {
        matches!(self, Self::Fake(_))
    }
}

impl Clock for ClockHandle {
    fn sleep(&self, duration: Duration) {
        match self {
            Self::System(c) => c.sleep(duration),
            Self::Fake(c) => c.sleep(duration),
        }
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
