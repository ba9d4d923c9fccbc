//! Fire-and-forget timed output.

use crate::clock::{has_elapsed, Millis};
use crate::config::BUZZER_PULSE_MS;

/// An output that stays on for a fixed duration after [`start`](Self::start).
///
/// Starting again while active restarts the window; pulses do not queue.
#[derive(Clone, Copy, Debug)]
pub struct TimedActuation {
    started: Option<Millis>,
    duration: Millis,
}

impl TimedActuation {
    pub const fn new(duration: Millis) -> Self {
        Self {
            started: None,
            duration,
        }
    }

    /// The long-press buzzer pulse.
    pub const fn buzzer() -> Self {
        Self::new(BUZZER_PULSE_MS)
    }

    pub fn start(&mut self, now: Millis) {
        self.started = Some(now);
    }

    /// Clear the output once the duration has passed; returns whether it is still on.
    pub fn poll(&mut self, now: Millis) -> bool {
        if let Some(started) = self.started {
            if has_elapsed(now, started, self.duration) {
                self.started = None;
            }
        }
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }

    pub fn duration(&self) -> Millis {
        self.duration
    }
}
