//! Blink timing and per-channel blink phases.

use super::Intensities;
use crate::clock::{has_elapsed, Millis};
use crate::config::{BLINK_INTERVAL_MS, MAX_INTENSITY, MODE_PANEL_CHANNELS};

/// Which channels follow the blink state and which run inverted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkPattern {
    follows: [bool; MODE_PANEL_CHANNELS],
}

impl BlinkPattern {
    /// Outer channels in phase, middle channel inverted.
    pub const ALTERNATE: Self = Self::new([true, false, true]);

    /// All channels blink together.
    pub const IN_PHASE: Self = Self::new([true; MODE_PANEL_CHANNELS]);

    /// `follows[i] == false` inverts channel `i`.
    pub const fn new(follows: [bool; MODE_PANEL_CHANNELS]) -> Self {
        Self { follows }
    }

    pub fn render(&self, on: bool) -> Intensities {
        self.follows
            .map(|follows| if follows == on { MAX_INTENSITY } else { 0 })
    }
}

impl Default for BlinkPattern {
    fn default() -> Self {
        Self::ALTERNATE
    }
}

/// Toggles a boolean phase every interval.
#[derive(Clone, Copy, Debug)]
pub struct BlinkTimer {
    last_toggle: Millis,
    on: bool,
    interval: Millis,
}

impl BlinkTimer {
    pub const fn new() -> Self {
        Self::with_interval(BLINK_INTERVAL_MS)
    }

    pub const fn with_interval(interval: Millis) -> Self {
        Self {
            last_toggle: 0,
            on: false,
            interval,
        }
    }

    /// Phase off, interval counted from `now`.
    pub fn restart(&mut self, now: Millis) {
        self.on = false;
        self.last_toggle = now;
    }

    /// Toggle if a full interval passed since the last toggle; returns the phase.
    pub fn advance(&mut self, now: Millis) -> bool {
        if has_elapsed(now, self.last_toggle, self.interval) {
            self.on = !self.on;
            self.last_toggle = now;
        }
        self.on
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for BlinkTimer {
    fn default() -> Self {
        Self::new()
    }
}
