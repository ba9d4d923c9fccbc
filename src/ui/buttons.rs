//! GPIO button sampling.
//!
//! Physical buttons (active-low with internal pull-up):
//!   - CYCLE  - step to the next LED mode (mode panel)
//!   - RESET  - force all LEDs off (mode panel)
//!   - BUTTON - short/long press (press panel)
//!
//! Pins are read once per tick by the panel's polling loop; debouncing
//! happens in [`crate::input`], not here.

use crate::error::Error;
use crate::input::{InputSource, Level};
use embedded_hal::digital::InputPin;

/// Button inputs keyed by GPIO number.
pub struct ButtonPins<P, const N: usize> {
    pins: [(u8, P); N],
}

impl<P, const N: usize> ButtonPins<P, N>
where
    P: InputPin,
{
    pub fn new(pins: [(u8, P); N]) -> Self {
        Self { pins }
    }
}

impl<P, const N: usize> InputSource for ButtonPins<P, N>
where
    P: InputPin,
{
    fn read_digital(&mut self, pin: u8) -> Result<Level, Error> {
        let (_, input) = self
            .pins
            .iter_mut()
            .find(|(gpio, _)| *gpio == pin)
            .ok_or(Error::UnknownPin(pin))?;
        input
            .is_high()
            .map(Level::from_high)
            .map_err(|_| Error::Gpio)
    }
}
