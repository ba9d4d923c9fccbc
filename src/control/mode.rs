//! Four-mode LED controller.
//!
//! ```text
//!   cycle      cycle       cycle      cycle
//! Off ──► AllOn ──► Blink ──► Fade ──► Off
//!  ▲                                    │
//!  └──────────── reset (any mode) ◄─────┘
//! ```

use super::{BlinkPattern, BlinkTimer, FadeTimer};
use crate::clock::Millis;
use crate::config::{MAX_INTENSITY, MODE_PANEL_CHANNELS};
use crate::ui::Status;

/// One intensity (0..=255) per LED channel.
pub type Intensities = [u8; MODE_PANEL_CHANNELS];

/// LED display mode selected by the cycle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Off,
    AllOn,
    Blink,
    Fade,
}

impl Mode {
    /// Number of modes in the cycle.
    pub const COUNT: usize = 4;

    pub const fn index(self) -> usize {
        match self {
            Mode::Off => 0,
            Mode::AllOn => 1,
            Mode::Blink => 2,
            Mode::Fade => 3,
        }
    }

    /// Mode at `index`, wrapped modulo [`Mode::COUNT`].
    pub const fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Mode::Off,
            1 => Mode::AllOn,
            2 => Mode::Blink,
            _ => Mode::Fade,
        }
    }

    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Status line shown while this mode is active.
    pub const fn status(self) -> Status {
        match self {
            Mode::Off => Status::AllOff,
            Mode::AllOn => Status::AllOn,
            Mode::Blink => Status::Blinking,
            Mode::Fade => Status::PwmFade,
        }
    }
}

/// Mode state machine plus the timers of the animated modes.
#[derive(Clone, Copy, Debug)]
pub struct ModeController {
    mode: Mode,
    blink: BlinkTimer,
    fade: FadeTimer,
    pattern: BlinkPattern,
}

impl ModeController {
    pub const fn new(pattern: BlinkPattern) -> Self {
        Self {
            mode: Mode::Off,
            blink: BlinkTimer::new(),
            fade: FadeTimer::new(),
            pattern,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Advance to the next mode (cycle button press).
    pub fn cycle(&mut self, now: Millis) -> Mode {
        self.enter(self.mode.next(), now)
    }

    /// Return to Off from any mode (reset button press).
    pub fn reset(&mut self, now: Millis) -> Mode {
        self.enter(Mode::Off, now)
    }

    fn enter(&mut self, mode: Mode, now: Millis) -> Mode {
        self.mode = mode;
        self.blink.restart(now);
        self.fade.restart(now);
        mode
    }

    /// Channel intensities for this tick, advancing the active timer.
    pub fn render(&mut self, now: Millis) -> Intensities {
        match self.mode {
            Mode::Off => [0; MODE_PANEL_CHANNELS],
            Mode::AllOn => [MAX_INTENSITY; MODE_PANEL_CHANNELS],
            Mode::Blink => {
                let on = self.blink.advance(now);
                self.pattern.render(on)
            }
            Mode::Fade => [self.fade.advance(now); MODE_PANEL_CHANNELS],
        }
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(BlinkPattern::ALTERNATE)
    }
}
