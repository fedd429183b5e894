//! Injectable clock for relative-day classification.
//!
//! "Today" and "tomorrow" are the only hidden inputs to any formatter in
//! this crate. Routing them through a [`Clock`] keeps every date formatter
//! a pure function of its arguments plus one explicit dependency, so tests
//! can pin the current instant instead of stubbing a global.

use jiff::Timestamp;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

/// Clock backed by the system time. The default for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let instant = Timestamp::from_second(1331226000).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock;
        assert!(clock.now() <= clock.now());
    }
}
