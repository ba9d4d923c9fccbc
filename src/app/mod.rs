//! Per-firmware composition roots.
//!
//! Each panel exposes two layers:
//!
//! - `tick(now, raw levels) -> frame`: pure, no I/O
//! - `step(now, input, actuator, display)`: samples the pins, ticks,
//!   writes the frame to the sinks
//!
//! The firmware calls `step` once per loop iteration with the clock
//! sampled at the start of that iteration.

pub mod mode_panel;
pub mod press_panel;

pub use mode_panel::{ModeFrame, ModePanel};
pub use press_panel::{PressFrame, PressPanel};
