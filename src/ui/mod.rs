//! User interface - OLED status line + physical buttons.
//!
//! The panels report a [`Status`] every tick; [`StatusLine`] redraws the
//! OLED only when it changes.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C (feature `embedded`)
//! - **Buttons**: active-low tactile switches read through `embedded-hal`

pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;

use crate::config::STATUS_CURSOR;
use crate::error::Error;

/// Status strings shown on the OLED.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Press panel boot screen.
    Ready,
    LongPress,
    LedOn,
    LedOff,
    AllOff,
    AllOn,
    Blinking,
    PwmFade,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Ready => "Ready",
            Status::LongPress => "Long Press",
            Status::LedOn => "LED ON",
            Status::LedOff => "LED OFF",
            Status::AllOff => "ALL OFF",
            Status::AllOn => "ALL ON",
            Status::Blinking => "BLINKING",
            Status::PwmFade => "PWM FADE",
        }
    }
}

/// Text sink for the status line.
pub trait StatusDisplay {
    /// Blank the frame buffer.
    fn clear(&mut self);

    fn set_cursor(&mut self, x: i32, y: i32);

    /// Draw `text` at the cursor.
    fn print(&mut self, text: &str) -> Result<(), Error>;

    /// Push the frame buffer to the panel.
    fn flush(&mut self) -> Result<(), Error>;
}

/// Replace whatever is on screen with `status`.
pub fn show_status<D>(display: &mut D, status: Status) -> Result<(), Error>
where
    D: StatusDisplay + ?Sized,
{
    display.clear();
    let (x, y) = STATUS_CURSOR;
    display.set_cursor(x, y);
    display.print(status.as_str())?;
    display.flush()
}

/// Remembers the last status drawn so unchanged frames skip the I²C traffic.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatusLine {
    shown: Option<Status>,
}

impl StatusLine {
    pub const fn new() -> Self {
        Self { shown: None }
    }

    /// Draw `status` if it differs from the last one drawn.
    ///
    /// Returns `true` when the display was redrawn. A failed draw is
    /// retried on the next call.
    pub fn update<D>(&mut self, display: &mut D, status: Status) -> Result<bool, Error>
    where
        D: StatusDisplay + ?Sized,
    {
        if self.shown == Some(status) {
            return Ok(false);
        }
        show_status(display, status)?;
        self.shown = Some(status);
        Ok(true)
    }

    pub fn shown(&self) -> Option<Status> {
        self.shown
    }
}
