#![forbid(unsafe_code)]

//! Owned, cancelable timers driven by an injected clock.
//!
//! Widgets never read the wall clock. The host advances time explicitly
//! (`advance(delta)`), which keeps every state machine deterministic and
//! testable without sleeping.
//!
//! # Invariants
//!
//! 1. A [`Timeout`] fires at most once per arming, then disarms itself.
//! 2. An [`Interval`] fires once per elapsed period while active and never
//!    fires after [`Interval::cancel`].
//! 3. Zero periods are clamped to 1ns so an interval always makes progress.
//!
//! # Example
//!
//! ```
//! use marquee_core::timer::Interval;
//! use web_time::Duration;
//!
//! let mut every = Interval::new(Duration::from_millis(100));
//! assert_eq!(every.advance(Duration::from_millis(250)), 2);
//! every.cancel();
//! assert_eq!(every.advance(Duration::from_secs(10)), 0);
//! ```

use web_time::Duration;

const MIN_PERIOD: Duration = Duration::from_nanos(1);

/// A one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timeout {
    remaining: Option<Duration>,
}

impl Timeout {
    /// A disarmed timeout.
    #[must_use]
    pub const fn idle() -> Self {
        Self { remaining: None }
    }

    /// A timeout armed to fire after `after`.
    #[must_use]
    pub const fn armed(after: Duration) -> Self {
        Self {
            remaining: Some(after),
        }
    }

    /// Arm (or re-arm) the timeout.
    pub fn arm(&mut self, after: Duration) {
        self.remaining = Some(after);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time left until the timeout fires, if armed.
    #[inline]
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Advance by `delta`. Returns `true` if the timeout fired during this step.
    pub fn advance(&mut self, delta: Duration) -> bool {
        match self.remaining {
            Some(left) if delta >= left => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - delta);
                false
            }
            None => false,
        }
    }
}

/// A repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    until_next: Duration,
    active: bool,
}

impl Interval {
    /// Start a repeating timer whose first period begins now.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            until_next: period,
            active: true,
        }
    }

    /// A cancelled interval that never fires.
    #[must_use]
    pub fn stopped() -> Self {
        Self {
            period: MIN_PERIOD,
            until_next: MIN_PERIOD,
            active: false,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Time left until the next firing, if active.
    #[inline]
    pub fn until_next(&self) -> Option<Duration> {
        self.active.then_some(self.until_next)
    }

    /// Stop the interval permanently. Use [`Interval::restart`] to run again.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Tear down and recreate with a new period; the phase starts over.
    pub fn restart(&mut self, period: Duration) {
        *self = Self::new(period);
    }

    /// Advance by `delta`. Returns how many periods elapsed.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if !self.active {
            return 0;
        }
        if delta < self.until_next {
            self.until_next -= delta;
            return 0;
        }
        let past_first = delta - self.until_next;
        let period_ns = self.period.as_nanos();
        let extra = past_first.as_nanos() / period_ns;
        let into_period = past_first.as_nanos() % period_ns;
        // into_period < period_ns, which already fits in the period's u64 nanos.
        self.until_next = self.period - Duration::from_nanos(into_period as u64);
        u32::try_from(extra + 1).unwrap_or(u32::MAX)
    }
}
