//! Time-based debouncer.

use super::Level;
use crate::clock::{has_elapsed, Millis};
use crate::config::DEBOUNCE_WINDOW_MS;

/// Debounce state for one input pin.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    /// Last raw sample seen.
    raw: Level,
    /// Last confirmed level.
    stable: Level,
    /// When `raw` last changed.
    last_change: Millis,
    window: Millis,
}

impl Debouncer {
    pub const fn new(initial: Level) -> Self {
        Self::with_window(initial, DEBOUNCE_WINDOW_MS)
    }

    pub const fn with_window(initial: Level, window: Millis) -> Self {
        Self {
            raw: initial,
            stable: initial,
            last_change: 0,
            window,
        }
    }

    /// Feed one raw sample taken at `now` and return the stable level.
    ///
    /// Any change of the raw level restarts the window; the stable level
    /// follows only once the raw level held for the whole window.
    pub fn observe(&mut self, raw: Level, now: Millis) -> Level {
        if raw != self.raw {
            self.raw = raw;
            self.last_change = now;
        }

        if raw != self.stable && has_elapsed(now, self.last_change, self.window) {
            self.stable = raw;
        }

        self.stable
    }

    pub fn stable(&self) -> Level {
        self.stable
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Level::High)
    }
}
