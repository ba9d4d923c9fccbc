//! Single-button panel: short press toggles the LED, long press beeps.

use crate::clock::Millis;
use crate::config::{BTN_PIN, BUZZER_PIN, MAX_INTENSITY};
use crate::control::{PressClassifier, PressKind, TimedActuation};
use crate::error::Error;
use crate::input::{Button, InputSource, Level};
use crate::output::{Actuator, Channel};
use crate::ui::{Status, StatusDisplay, StatusLine};

/// Outputs of one press panel tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressFrame {
    /// Status LED intensity.
    pub led: u8,
    pub buzzer: Level,
    /// Press completed on this tick, if any.
    pub press: Option<PressKind>,
    pub status: Status,
}

pub struct PressPanel {
    button: Button,
    classifier: PressClassifier,
    led_on: bool,
    buzzer: TimedActuation,
    status: Status,
    status_line: StatusLine,
}

impl PressPanel {
    /// `level` is the button pin level read at boot.
    pub const fn new(level: Level) -> Self {
        Self {
            button: Button::new(level),
            classifier: PressClassifier::new(),
            led_on: false,
            buzzer: TimedActuation::buzzer(),
            status: Status::Ready,
            status_line: StatusLine::new(),
        }
    }

    pub fn led_on(&self) -> bool {
        self.led_on
    }

    /// Advance one tick from a raw pin sample.
    pub fn tick(&mut self, now: Millis, raw: Level) -> PressFrame {
        let press = self
            .button
            .sample(raw, now)
            .and_then(|edge| self.classifier.on_edge(edge, now));

        match press {
            Some(PressKind::Long) => {
                self.buzzer.start(now);
                self.status = Status::LongPress;
            }
            Some(PressKind::Short) => {
                self.led_on = !self.led_on;
                self.status = if self.led_on {
                    Status::LedOn
                } else {
                    Status::LedOff
                };
            }
            None => {}
        }

        let buzzing = self.buzzer.poll(now);

        PressFrame {
            led: if self.led_on { MAX_INTENSITY } else { 0 },
            buzzer: Level::from_high(buzzing),
            press,
            status: self.status,
        }
    }

    /// Sample the button, tick, and write the frame to the sinks.
    pub fn step<I, A, D>(
        &mut self,
        now: Millis,
        input: &mut I,
        actuator: &mut A,
        display: &mut D,
    ) -> Result<PressFrame, Error>
    where
        I: InputSource + ?Sized,
        A: Actuator + ?Sized,
        D: StatusDisplay + ?Sized,
    {
        let raw = input.read_digital(BTN_PIN)?;
        let frame = self.tick(now, raw);

        actuator.set_intensity(Channel::STATUS, frame.led)?;
        actuator.set_digital(BUZZER_PIN, frame.buzzer)?;
        self.status_line.update(display, frame.status)?;

        Ok(frame)
    }
}

impl Default for PressPanel {
    fn default() -> Self {
        Self::new(Level::High)
    }
}
