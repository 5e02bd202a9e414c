//! Clock Abstraction
//!
//! Injected time source so TTL behavior is testable without sleeping.

use std::time::Instant;

/// Time source for cache expiry decisions
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock backed implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
