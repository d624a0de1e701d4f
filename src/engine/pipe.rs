use crate::engine::{bird::Bird, object::Object};

/// A pipe pair: one solid rectangle from the top of the field down to `y`, another from `y + gap` to the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: f64,
    /// Top of the gap, fixed at spawn.
    pub y: f64,
    width: f64,
    gap: f64,
}

impl Pipe {
    pub fn new(x: f64, y: f64, width: f64, gap: f64) -> Self {
        Pipe { x, y, width, gap }
    }

    pub fn advance(&mut self, step: f64) {
        self.x -= step;
    }

    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width
    }

    pub fn gap_bottom(&self) -> f64 {
        self.y + self.gap
    }

    pub fn is_off_field(&self) -> bool {
        self.trailing_edge() <= 0.0
    }

    /// Tangency with a gap edge is not a hit.
    pub fn collides_with(&self, bird: &Bird) -> bool {
        bird.overlaps_horizontally(self) && (bird.top() < self.y || bird.bottom() > self.gap_bottom())
    }
}

impl Object for Pipe {
    fn left(&self) -> f64 {
        self.x
    }

    fn right(&self) -> f64 {
        self.trailing_edge()
    }
}
