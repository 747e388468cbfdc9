use chrono::{DateTime, Utc};

/// Source of wall-clock time for token expiry decisions.
///
/// Production code uses [`SystemClock`]; tests substitute a clock they can
/// move forward by hand.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system time through [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
