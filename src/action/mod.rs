mod game;

use serde::{Deserialize, Serialize};
use strum::Display;

pub use crate::action::game::GameAction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    // Page actions
    Game(GameAction),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::engine::Intent;

    #[test]
    fn test_unit_actions_parse_from_plain_names() {
        assert_eq!(serde_plain::from_str::<Action>("Quit").unwrap(), Action::Quit);
        assert_eq!(serde_plain::from_str::<Action>("Suspend").unwrap(), Action::Suspend);
        assert_eq!(serde_plain::from_str::<GameAction>("Flap").unwrap(), GameAction::Flap);
        assert!(serde_plain::from_str::<GameAction>("Jump").is_err());
    }

    #[test]
    fn test_game_action_into_intent() {
        assert_eq!(Intent::from(GameAction::Flap), Intent::Flap);
        assert_eq!(Intent::from(GameAction::Start), Intent::Start);
    }
}
