//! Press/release edges from stable levels (active-low).

use super::{Edge, Level};

/// Edge between two consecutive stable levels.
pub fn detect(previous: Level, current: Level) -> Option<Edge> {
    match (previous, current) {
        (Level::High, Level::Low) => Some(Edge::Pressed),
        (Level::Low, Level::High) => Some(Edge::Released),
        _ => None,
    }
}

/// Remembers the previous stable level so callers feed one level per tick.
#[derive(Clone, Copy, Debug)]
pub struct EdgeDetector {
    previous: Level,
}

impl EdgeDetector {
    pub const fn new(initial: Level) -> Self {
        Self { previous: initial }
    }

    pub fn update(&mut self, current: Level) -> Option<Edge> {
        let edge = detect(self.previous, current);
        self.previous = current;
        edge
    }
}
