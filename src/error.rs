//! Unified error type for ledpanel.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the sink adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // UI / Display
    /// The SSD1306 did not answer during initialisation.
    DisplayNotFound,

    /// I²C transaction to the display failed.
    Display,

    // Outputs
    /// LEDC timer/channel configuration or duty update failed.
    Pwm,

    /// A GPIO read or write failed.
    Gpio,

    // Routing
    /// No input or digital output is wired to this GPIO number.
    UnknownPin(u8),

    /// No PWM channel has this index.
    UnknownChannel(u8),
}

/// Fail-stop: park the CPU forever.
///
/// Used when the display is missing at boot. The device stays
/// unresponsive until power-off.
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
