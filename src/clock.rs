//! Caller-supplied time and interval helpers for the timed phases.
//!
//! Nothing here reads a clock. The driving loop picks an epoch (for example
//! the `std::time::Instant` at which it started) and reports every moment as
//! an offset from it.

use core::ops::Add;
use core::time::Duration;

/// A moment on the driving loop's monotonic timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(Duration);

impl Timestamp {
    /// The driving loop's epoch.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Creates a timestamp from an offset since the epoch.
    #[must_use]
    pub const fn from_duration(offset: Duration) -> Self {
        Self(offset)
    }

    /// Creates a timestamp from whole milliseconds since the epoch.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Creates a timestamp from whole seconds since the epoch.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// Returns the offset since the epoch.
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

/// Returns the time between `since` and `now`.
///
/// Saturates at zero if `now` is earlier than `since`.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use handrps::clock::{elapsed, Timestamp};
///
/// let since = Timestamp::from_secs(2);
/// assert_eq!(elapsed(Timestamp::from_millis(2500), since), Duration::from_millis(500));
/// assert_eq!(elapsed(Timestamp::from_secs(1), since), Duration::ZERO);
/// ```
#[must_use]
pub const fn elapsed(now: Timestamp, since: Timestamp) -> Duration {
    now.0.saturating_sub(since.0)
}

/// Returns how much of `budget` is left at `now` for a phase entered at `since`.
///
/// A zero result means the budget is spent.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use handrps::clock::{remaining, Timestamp};
///
/// let since = Timestamp::from_secs(10);
/// let budget = Duration::from_secs(3);
/// assert_eq!(remaining(Timestamp::from_secs(11), since, budget), Duration::from_secs(2));
/// assert!(remaining(Timestamp::from_secs(13), since, budget).is_zero());
/// assert!(remaining(Timestamp::from_secs(20), since, budget).is_zero());
/// ```
#[must_use]
pub const fn remaining(now: Timestamp, since: Timestamp, budget: Duration) -> Duration {
    budget.saturating_sub(elapsed(now, since))
}

/// Returns whether `budget` is spent at `now` for a phase entered at `since`.
#[must_use]
pub const fn is_expired(now: Timestamp, since: Timestamp, budget: Duration) -> bool {
    remaining(now, since, budget).is_zero()
}
