//! LED behaviour state machines.
//!
//! - [`ModeController`]: four-mode cycle (off / all-on / blink / fade)
//! - [`PressClassifier`]: short vs. long press of a single button
//! - [`TimedActuation`]: self-terminating output pulse (buzzer)

pub mod blink;
pub mod fade;
pub mod mode;
pub mod press;
pub mod pulse;


pub use blink::{BlinkPattern, BlinkTimer};
pub use fade::FadeTimer;
pub use mode::{Intensities, Mode, ModeController};
pub use press::{PressClassifier, PressKind, PressSession};
pub use pulse::TimedActuation;
