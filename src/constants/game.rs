use ratatui::style::Color;

pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;

pub const BIRD_X: f64 = 50.0;
pub const BIRD_RADIUS: f64 = 20.0;
pub const GRAVITY: f64 = 0.1;
// Negative is upward
pub const FLAP_IMPULSE: f64 = -3.0;

pub const PIPE_WIDTH: f64 = 80.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_SPEED: f64 = 2.0;
pub const SPAWN_INTERVAL: u32 = 180;

pub const INITIAL_SPEED: f64 = 2.0;
pub const SPEED_INCREMENT: f64 = 0.01;

pub const BIRD_COLOR: Color = Color::Red;
pub const PIPE_COLOR: Color = Color::LightGreen;
pub const SCORE_COLOR: Color = Color::White;
pub const PROMPT_COLOR: Color = Color::Yellow;
