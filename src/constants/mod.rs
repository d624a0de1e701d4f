pub mod game;

pub const TITLE: &str = "Flappy Floes";
pub const START_PROMPT: &str = "Click to Start Playing Flappy Floes";
