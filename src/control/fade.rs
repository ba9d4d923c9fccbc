//! Triangle-wave PWM fade.

use crate::clock::{has_elapsed, Millis};
use crate::config::{FADE_INTERVAL_MS, FADE_STEP, MAX_INTENSITY};

/// Ramps 0 → 255 → 0 in fixed steps, one step per elapsed interval.
#[derive(Clone, Copy, Debug)]
pub struct FadeTimer {
    last_step: Millis,
    value: u8,
    rising: bool,
    interval: Millis,
    step: u8,
}

impl FadeTimer {
    pub const fn new() -> Self {
        Self::with_step(FADE_INTERVAL_MS, FADE_STEP)
    }

    pub const fn with_step(interval: Millis, step: u8) -> Self {
        Self {
            last_step: 0,
            value: 0,
            rising: true,
            interval,
            step,
        }
    }

    /// Back to 0 and rising, interval counted from `now`.
    pub fn restart(&mut self, now: Millis) {
        self.value = 0;
        self.rising = true;
        self.last_step = now;
    }

    /// Take one step if an interval passed since the last one; returns the value.
    pub fn advance(&mut self, now: Millis) -> u8 {
        if has_elapsed(now, self.last_step, self.interval) {
            self.step_once();
            self.last_step = now;
        }
        self.value
    }

    fn step_once(&mut self) {
        let delta = i16::from(self.step);
        let next = if self.rising {
            i16::from(self.value) + delta
        } else {
            i16::from(self.value) - delta
        };

        if next >= i16::from(MAX_INTENSITY) {
            self.value = MAX_INTENSITY;
            self.rising = false;
        } else if next <= 0 {
            self.value = 0;
            self.rising = true;
        } else {
            self.value = next as u8;
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_rising(&self) -> bool {
        self.rising
    }
}

impl Default for FadeTimer {
    fn default() -> Self {
        Self::new()
    }
}
