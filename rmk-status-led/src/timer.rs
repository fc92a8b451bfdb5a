//! A single reusable timer for LED blinking and dwelling.
//!
//! The timer doesn't own a task. It only tracks its next deadline; the owner
//! waits for [`BlinkTimer::deadline`] and calls [`BlinkTimer::poll`] when it's due.

use embassy_time::{Duration, Instant};

/// Current mode of the [`BlinkTimer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerMode {
    Stopped,
    /// Expires once, then stops
    OneShot,
    /// Expires every period until cancelled
    Repeating(Duration),
}

/// Expiry reported by [`BlinkTimer::poll`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerExpiry {
    /// A repeating period elapsed, the timer is still running
    Period,
    /// The one-shot delay elapsed, the timer is stopped
    OneShot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkTimer {
    mode: TimerMode,
    deadline: Option<Instant>,
}

impl Default for BlinkTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlinkTimer {
    pub const fn new() -> Self {
        Self {
            mode: TimerMode::Stopped,
            deadline: None,
        }
    }

    /// (Re)arm as a repeating timer, first expiry is one `period` from now
    pub fn arm_repeating(&mut self, period: Duration) {
        self.arm_repeating_at(Instant::now(), period);
    }

    /// (Re)arm as a one-shot timer which expires `delay` from now
    pub fn arm_one_shot(&mut self, delay: Duration) {
        self.arm_one_shot_at(Instant::now(), delay);
    }

    pub fn arm_repeating_at(&mut self, now: Instant, period: Duration) {
        self.mode = TimerMode::Repeating(period);
        self.deadline = Some(now + period);
    }

    pub fn arm_one_shot_at(&mut self, now: Instant, delay: Duration) {
        self.mode = TimerMode::OneShot;
        self.deadline = Some(now + delay);
    }

    /// Stop the timer. Cancelling a stopped timer does nothing.
    pub fn cancel(&mut self) {
        self.mode = TimerMode::Stopped;
        self.deadline = None;
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Next expiry, `None` if the timer is stopped
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume at most one expiry which is due at `now`.
    ///
    /// A repeating timer schedules its next expiry one period after the consumed deadline,
    /// so a late poll doesn't shift the phase.
    pub fn poll(&mut self, now: Instant) -> Option<TimerExpiry> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        match self.mode {
            TimerMode::Repeating(period) => {
                self.deadline = Some(deadline + period);
                Some(TimerExpiry::Period)
            }
            TimerMode::OneShot => {
                self.cancel();
                Some(TimerExpiry::OneShot)
            }
            TimerMode::Stopped => {
                self.deadline = None;
                None
            }
        }
    }
}
