//! LED and buzzer outputs.

pub mod leds;

use crate::error::Error;
use crate::input::Level;

pub use leds::{LedBank, WithBuzzer};

/// PWM channel index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel(pub u8);

impl Channel {
    // Mode panel
    pub const YELLOW: Channel = Channel(0);
    pub const GREEN: Channel = Channel(1);
    pub const RED: Channel = Channel(2);

    // Press panel
    pub const STATUS: Channel = Channel(0);
}

/// Sink for LED intensities and plain digital outputs.
pub trait Actuator {
    /// Drive `channel` at `value` (0 = off, 255 = full).
    fn set_intensity(&mut self, channel: Channel, value: u8) -> Result<(), Error>;

    /// Drive the digital output on GPIO `pin`.
    fn set_digital(&mut self, pin: u8, level: Level) -> Result<(), Error>;
}
