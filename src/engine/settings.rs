use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::game;

/// Tunable constants of a game session.
///
/// Distances are in play-field units with the origin at the top-left corner and y growing downward. Rates are per
/// tick, never per second: the engine does not know how fast it is being driven.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
#[builder(default)]
pub struct Settings {
    pub field_width: f64,
    pub field_height: f64,
    pub bird_x: f64,
    pub bird_radius: f64,
    pub gravity: f64,
    pub flap_impulse: f64,
    pub pipe_width: f64,
    pub pipe_gap: f64,
    pub pipe_speed: f64,
    pub spawn_interval: u32,
    pub initial_speed: f64,
    pub speed_increment: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: game::FIELD_WIDTH,
            field_height: game::FIELD_HEIGHT,
            bird_x: game::BIRD_X,
            bird_radius: game::BIRD_RADIUS,
            gravity: game::GRAVITY,
            flap_impulse: game::FLAP_IMPULSE,
            pipe_width: game::PIPE_WIDTH,
            pipe_gap: game::PIPE_GAP,
            pipe_speed: game::PIPE_SPEED,
            spawn_interval: game::SPAWN_INTERVAL,
            initial_speed: game::INITIAL_SPEED,
            speed_increment: game::SPEED_INCREMENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("`{name}` must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("`{name}` must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("`{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("`flap_impulse` must point upward (be negative), got {0}")]
    FlapNotUpward(f64),
    #[error("`spawn_interval` must be at least one tick")]
    ZeroSpawnInterval,
    #[error("play-field height {height} cannot fit two pipe gaps of {gap}")]
    GapTooLarge { height: f64, gap: f64 },
    #[error("bird x {x} lies outside the play-field width {width}")]
    BirdOutsideField { x: f64, width: f64 },
}

impl Settings {
    /// Rejects configurations that would corrupt a session instead of failing loudly, such as an empty spawn range
    /// or a spawn cadence of zero.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let reals = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird_x", self.bird_x),
            ("bird_radius", self.bird_radius),
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
            ("initial_speed", self.initial_speed),
            ("speed_increment", self.speed_increment),
        ];
        if let Some(&(name, value)) = reals.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SettingsError::NotFinite { name, value });
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird_radius", self.bird_radius),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("initial_speed", self.initial_speed),
        ];
        if let Some(&(name, value)) = positive.iter().find(|(_, value)| *value <= 0.0) {
            return Err(SettingsError::NotPositive { name, value });
        }

        let non_negative =
            [("gravity", self.gravity), ("pipe_speed", self.pipe_speed), ("speed_increment", self.speed_increment)];
        if let Some(&(name, value)) = non_negative.iter().find(|(_, value)| *value < 0.0) {
            return Err(SettingsError::Negative { name, value });
        }

        if self.flap_impulse >= 0.0 {
            return Err(SettingsError::FlapNotUpward(self.flap_impulse));
        }
        if self.spawn_interval == 0 {
            return Err(SettingsError::ZeroSpawnInterval);
        }
        if self.field_height < 2.0 * self.pipe_gap {
            return Err(SettingsError::GapTooLarge { height: self.field_height, gap: self.pipe_gap });
        }
        if self.bird_x < 0.0 || self.bird_x > self.field_width {
            return Err(SettingsError::BirdOutsideField { x: self.bird_x, width: self.field_width });
        }

        Ok(())
    }
}
