//! SSD1306 OLED display wrapper.

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use super::StatusDisplay;
use crate::config::OLED_I2C_ADDRESS;
use crate::error::Error;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Driver<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered OLED with a text cursor.
pub struct OledDisplay<I2C> {
    driver: Driver<I2C>,
    cursor: Point,
}

/// Initialise the SSD1306 display and clear the screen.
///
/// Fails with [`Error::DisplayNotFound`] when the panel does not
/// acknowledge on the bus.
pub fn init<I2C>(i2c: I2C) -> Result<OledDisplay<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, OLED_I2C_ADDRESS);
    let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    driver.init().map_err(|_| Error::DisplayNotFound)?;
    driver.clear_buffer();
    driver.flush().map_err(|_| Error::Display)?;
    Ok(OledDisplay {
        driver,
        cursor: Point::zero(),
    })
}

// 10×20 glyphs: roughly the classic 6×8 font at double size.
fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> StatusDisplay for OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.driver.clear_buffer();
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn print(&mut self, text: &str) -> Result<(), Error> {
        Text::with_baseline(text, self.cursor, text_style(), Baseline::Top)
            .draw(&mut self.driver)
            .map(|_| ())
            .map_err(|_| Error::Display)
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.driver.flush().map_err(|_| Error::Display)
    }
}
