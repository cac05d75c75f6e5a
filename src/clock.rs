//! # Clock
//!
//! Source of the timestamps attached to [`LexError`](crate::tokenizer::LexError)s.
//! The lexer never reads the time for its own decisions, so callers that
//! need reproducible errors (tests, caches) can inject a [`FixedClock`].
use std::time::SystemTime;

/// Supplies the current time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> SystemTime;
}

/// Reads the system wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub SystemTime);

impl Default for FixedClock {
    fn default() -> Self {
        Self(SystemTime::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}
