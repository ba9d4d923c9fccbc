//! `embedded-hal` backed actuators.
//!
//! On the ESP32 the LED channels are LEDC PWM channels (5 kHz, 8-bit)
//! and the buzzer is a plain push-pull GPIO.

use super::{Actuator, Channel};
use crate::config::MAX_INTENSITY;
use crate::error::Error;
use crate::input::Level;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// A fixed set of PWM LED channels, indexed by [`Channel`].
pub struct LedBank<P, const N: usize> {
    channels: [P; N],
}

impl<P, const N: usize> LedBank<P, N>
where
    P: SetDutyCycle,
{
    pub fn new(channels: [P; N]) -> Self {
        Self { channels }
    }

    pub fn all_off(&mut self) -> Result<(), Error> {
        for pwm in self.channels.iter_mut() {
            pwm.set_duty_cycle_fully_off().map_err(|_| Error::Pwm)?;
        }
        Ok(())
    }
}

impl<P, const N: usize> Actuator for LedBank<P, N>
where
    P: SetDutyCycle,
{
    fn set_intensity(&mut self, channel: Channel, value: u8) -> Result<(), Error> {
        let pwm = self
            .channels
            .get_mut(usize::from(channel.0))
            .ok_or(Error::UnknownChannel(channel.0))?;
        pwm.set_duty_cycle_fraction(u16::from(value), u16::from(MAX_INTENSITY))
            .map_err(|_| Error::Pwm)
    }

    fn set_digital(&mut self, pin: u8, _level: Level) -> Result<(), Error> {
        Err(Error::UnknownPin(pin))
    }
}

/// Adds a digital buzzer pin to another actuator.
pub struct WithBuzzer<A, B> {
    leds: A,
    buzzer: B,
    pin: u8,
}

impl<A, B> WithBuzzer<A, B>
where
    A: Actuator,
    B: OutputPin,
{
    /// `pin` is the GPIO number `buzzer` is wired to.
    pub fn new(leds: A, buzzer: B, pin: u8) -> Self {
        Self { leds, buzzer, pin }
    }
}

impl<A, B> Actuator for WithBuzzer<A, B>
where
    A: Actuator,
    B: OutputPin,
{
    fn set_intensity(&mut self, channel: Channel, value: u8) -> Result<(), Error> {
        self.leds.set_intensity(channel, value)
    }

    fn set_digital(&mut self, pin: u8, level: Level) -> Result<(), Error> {
        if pin != self.pin {
            return self.leds.set_digital(pin, level);
        }
        let written = match level {
            Level::High => self.buzzer.set_high(),
            Level::Low => self.buzzer.set_low(),
        };
        written.map_err(|_| Error::Gpio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    struct FakePwm {
        duty: u16,
    }

    impl embedded_hal::pwm::ErrorType for FakePwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            255
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    // 10-bit channel, to check scaling onto a wider duty range.
    struct WidePwm {
        duty: u16,
    }

    impl embedded_hal::pwm::ErrorType for WidePwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for WidePwm {
        fn max_duty_cycle(&self) -> u16 {
            1023
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    struct FakeBuzzer {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for FakeBuzzer {
        type Error = Infallible;
    }

    impl OutputPin for FakeBuzzer {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn intensity_maps_onto_8bit_duty() {
        let mut bank = LedBank::new([FakePwm { duty: 7 }, FakePwm { duty: 7 }]);
        bank.set_intensity(Channel(0), 255).unwrap();
        bank.set_intensity(Channel(1), 5).unwrap();
        assert_eq!(bank.channels[0].duty, 255);
        assert_eq!(bank.channels[1].duty, 5);

        bank.all_off().unwrap();
        assert_eq!(bank.channels[0].duty, 0);
        assert_eq!(bank.channels[1].duty, 0);
    }

    #[test]
    fn intensity_scales_to_wider_duty_range() {
        let mut bank = LedBank::new([WidePwm { duty: 0 }]);
        bank.set_intensity(Channel(0), 255).unwrap();
        assert_eq!(bank.channels[0].duty, 1023);
        bank.set_intensity(Channel(0), 0).unwrap();
        assert_eq!(bank.channels[0].duty, 0);
    }

    #[test]
    fn unknown_channel_is_an_error() {
        let mut bank = LedBank::new([FakePwm { duty: 0 }]);
        assert_eq!(
            bank.set_intensity(Channel(3), 10),
            Err(Error::UnknownChannel(3))
        );
    }

    #[test]
    fn led_bank_has_no_digital_outputs() {
        let mut bank = LedBank::new([FakePwm { duty: 0 }]);
        assert_eq!(bank.set_digital(19, Level::High), Err(Error::UnknownPin(19)));
    }

    #[test]
    fn buzzer_follows_level_on_its_pin() {
        let bank = LedBank::new([FakePwm { duty: 0 }]);
        let mut out = WithBuzzer::new(bank, FakeBuzzer { high: false }, 19);

        out.set_digital(19, Level::High).unwrap();
        assert!(out.buzzer.high);
        out.set_digital(19, Level::Low).unwrap();
        assert!(!out.buzzer.high);

        assert_eq!(out.set_digital(5, Level::High), Err(Error::UnknownPin(5)));

        out.set_intensity(Channel::STATUS, 255).unwrap();
        assert_eq!(out.leds.channels[0].duty, 255);
    }
}
