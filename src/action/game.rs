use serde::{Deserialize, Serialize};
use strum::Display;

use crate::engine::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum GameAction {
    Flap,
    Start,
}

impl From<GameAction> for Intent {
    fn from(action: GameAction) -> Self {
        match action {
            GameAction::Flap => Intent::Flap,
            GameAction::Start => Intent::Start,
        }
    }
}
