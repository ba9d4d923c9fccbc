//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and display
//! constants live here so they can be tuned in one place.

use crate::clock::Millis;

// Buttons

/// A raw pin level must hold this long before it is trusted (ms).
pub const DEBOUNCE_WINDOW_MS: Millis = 30;

/// Presses held at least this long are long presses (ms).
pub const LONG_PRESS_THRESHOLD_MS: Millis = 1500;

// LED patterns

/// Half-period of the blink pattern (ms).
pub const BLINK_INTERVAL_MS: Millis = 500;

/// Time between fade steps (ms).
pub const FADE_INTERVAL_MS: Millis = 10;

/// Intensity change per fade step. 255 is a multiple of it, so the
/// triangle wave lands exactly on both bounds.
pub const FADE_STEP: u8 = 5;

/// Full LED intensity.
pub const MAX_INTENSITY: u8 = 255;

/// Number of LED channels on the mode panel.
pub const MODE_PANEL_CHANNELS: usize = 3;

// Buzzer

/// Length of the long-press buzzer pulse (ms).
pub const BUZZER_PULSE_MS: Millis = 200;

// PWM (ESP32 LEDC)

/// LEDC timer frequency in kHz.
pub const PWM_FREQUENCY_KHZ: u32 = 5;

// GPIO pin assignments (ESP32 DevKit)
//
//   Mode panel                 Press panel
//   LED yellow  → GPIO18       Status LED  → GPIO18
//   LED green   → GPIO17       Buzzer      → GPIO19
//   LED red     → GPIO16       Button      → GPIO25
//   Btn cycle   → GPIO25
//   Btn reset   → GPIO26
//
//   I²C SDA → GPIO21, I²C SCL → GPIO22 (both panels)
//
// The numbers are logical keys for the sink adapters; the concrete
// `esp_hal::peripherals::GPIOn` types are picked in the binaries.

pub const BTN_CYCLE_PIN: u8 = 25;
pub const BTN_RESET_PIN: u8 = 26;

pub const BTN_PIN: u8 = 25;
pub const BUZZER_PIN: u8 = 19;

/// I²C bus clock in kHz.
pub const I2C_FREQUENCY_KHZ: u32 = 400;

// Display (SSD1306)

/// 7-bit I²C address of the OLED.
pub const OLED_I2C_ADDRESS: u8 = 0x3C;

/// Top-left corner of the status line.
pub const STATUS_CURSOR: (i32, i32) = (0, 20);
