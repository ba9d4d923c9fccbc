//! Button input: raw pin levels in, confirmed press/release edges out.
//!
//! Buttons are active-low with the internal pull-up enabled, so a
//! released button reads `High` and a pressed one reads `Low`.
//!
//! ## Components
//!
//! - **Debouncer**: trusts a raw level only after it held for the window
//! - **EdgeDetector**: turns consecutive stable levels into edges
//! - **Button**: both of the above for one physical pin

pub mod debounce;
pub mod edge;


use crate::clock::Millis;
use crate::error::Error;

pub use debounce::Debouncer;
pub use edge::{detect, EdgeDetector};

/// Digital pin level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    High,
    Low,
}

impl Level {
    pub const fn from_high(is_high: bool) -> Self {
        if is_high {
            Level::High
        } else {
            Level::Low
        }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    pub const fn is_low(self) -> bool {
        matches!(self, Level::Low)
    }
}

/// Confirmed transition between stable levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// High → Low.
    Pressed,
    /// Low → High.
    Released,
}

/// Source of raw pin samples, read once per tick.
pub trait InputSource {
    /// Read the raw level of the button wired to GPIO `pin`.
    fn read_digital(&mut self, pin: u8) -> Result<Level, Error>;
}

/// One debounced physical button.
#[derive(Clone, Copy, Debug)]
pub struct Button {
    debouncer: Debouncer,
    edges: EdgeDetector,
}

impl Button {
    /// Create a button whose stable level starts at `initial`.
    ///
    /// Seed with the level read at boot so a button held during power-up
    /// does not report a press.
    pub const fn new(initial: Level) -> Self {
        Self {
            debouncer: Debouncer::new(initial),
            edges: EdgeDetector::new(initial),
        }
    }

    /// Feed one raw sample; returns the edge confirmed on this tick, if any.
    pub fn sample(&mut self, raw: Level, now: Millis) -> Option<Edge> {
        let stable = self.debouncer.observe(raw, now);
        self.edges.update(stable)
    }

    /// Debounced "held down" state.
    pub fn is_pressed(&self) -> bool {
        self.debouncer.stable().is_low()
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new(Level::High)
    }
}
