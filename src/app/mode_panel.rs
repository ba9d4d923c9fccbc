//! Four-mode LED panel: cycle + reset buttons, three PWM LEDs.

use crate::clock::Millis;
use crate::config::{BTN_CYCLE_PIN, BTN_RESET_PIN};
use crate::control::{BlinkPattern, Intensities, Mode, ModeController};
use crate::error::Error;
use crate::input::{Button, Edge, InputSource, Level};
use crate::output::{Actuator, Channel};
use crate::ui::{Status, StatusDisplay, StatusLine};

/// Outputs of one mode panel tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeFrame {
    pub mode: Mode,
    pub channels: Intensities,
    pub cycle: Option<Edge>,
    pub reset: Option<Edge>,
}

impl ModeFrame {
    pub fn status(&self) -> Status {
        self.mode.status()
    }

    /// `true` if a button press changed or restarted the mode this tick.
    pub fn mode_changed(&self) -> bool {
        self.cycle == Some(Edge::Pressed) || self.reset == Some(Edge::Pressed)
    }
}

pub struct ModePanel {
    cycle: Button,
    reset: Button,
    controller: ModeController,
    status: StatusLine,
}

impl ModePanel {
    /// `cycle_level` / `reset_level` are the pin levels read at boot.
    pub const fn new(pattern: BlinkPattern, cycle_level: Level, reset_level: Level) -> Self {
        Self {
            cycle: Button::new(cycle_level),
            reset: Button::new(reset_level),
            controller: ModeController::new(pattern),
            status: StatusLine::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Advance one tick from raw pin samples.
    ///
    /// Cycle is handled before reset, so both pressed on the same tick
    /// ends in Off.
    pub fn tick(&mut self, now: Millis, cycle_raw: Level, reset_raw: Level) -> ModeFrame {
        let cycle = self.cycle.sample(cycle_raw, now);
        if cycle == Some(Edge::Pressed) {
            self.controller.cycle(now);
        }

        let reset = self.reset.sample(reset_raw, now);
        if reset == Some(Edge::Pressed) {
            self.controller.reset(now);
        }

        ModeFrame {
            mode: self.controller.mode(),
            channels: self.controller.render(now),
            cycle,
            reset,
        }
    }

    /// Sample both buttons, tick, and write the frame to the sinks.
    pub fn step<I, A, D>(
        &mut self,
        now: Millis,
        input: &mut I,
        actuator: &mut A,
        display: &mut D,
    ) -> Result<ModeFrame, Error>
    where
        I: InputSource + ?Sized,
        A: Actuator + ?Sized,
        D: StatusDisplay + ?Sized,
    {
        let cycle_raw = input.read_digital(BTN_CYCLE_PIN)?;
        let reset_raw = input.read_digital(BTN_RESET_PIN)?;
        let frame = self.tick(now, cycle_raw, reset_raw);

        for (index, &value) in frame.channels.iter().enumerate() {
            actuator.set_intensity(Channel(index as u8), value)?;
        }
        self.status.update(display, frame.status())?;

        Ok(frame)
    }
}

impl Default for ModePanel {
    fn default() -> Self {
        Self::new(BlinkPattern::ALTERNATE, Level::High, Level::High)
    }
}
