use crate::engine::object::Object;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    x: f64,
    pub y: f64,
    pub radius: f64,
    /// Vertical, positive is downward.
    pub velocity: f64,
}

impl Bird {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Bird { x, y, radius, velocity: 0.0 }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    /// Replaces the current velocity with the impulse. Repeated flaps never stack.
    pub fn flap(&mut self, impulse: f64) {
        self.velocity = 0.0;
        self.velocity += impulse;
    }

    /// One explicit Euler step.
    pub fn integrate(&mut self, gravity: f64) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.radius
    }
}

impl Object for Bird {
    fn left(&self) -> f64 {
        self.x - self.radius
    }

    fn right(&self) -> f64 {
        self.x + self.radius
    }
}
