//! Short/long press classification for a single button.

use crate::clock::{elapsed, Millis};
use crate::config::LONG_PRESS_THRESHOLD_MS;
use crate::input::Edge;

/// Outcome of a completed press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    /// Released before the long-press threshold.
    Short,
    /// Held for at least the long-press threshold.
    Long,
}

/// A press in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressSession {
    pub start: Millis,
}

/// Opens a session on press, classifies it on release.
#[derive(Clone, Copy, Debug)]
pub struct PressClassifier {
    session: Option<PressSession>,
    threshold: Millis,
}

impl PressClassifier {
    pub const fn new() -> Self {
        Self::with_threshold(LONG_PRESS_THRESHOLD_MS)
    }

    pub const fn with_threshold(threshold: Millis) -> Self {
        Self {
            session: None,
            threshold,
        }
    }

    /// Feed a confirmed edge. Returns the press kind when a session closes.
    ///
    /// A release without an open session is ignored.
    pub fn on_edge(&mut self, edge: Edge, now: Millis) -> Option<PressKind> {
        match edge {
            Edge::Pressed => {
                self.session = Some(PressSession { start: now });
                None
            }
            Edge::Released => self
                .session
                .take()
                .map(|session| self.classify(elapsed(now, session.start))),
        }
    }

    pub fn classify(&self, duration: Millis) -> PressKind {
        if duration >= self.threshold {
            PressKind::Long
        } else {
            PressKind::Short
        }
    }

    pub fn session(&self) -> Option<PressSession> {
        self.session
    }
}

impl Default for PressClassifier {
    fn default() -> Self {
        Self::new()
    }
}
