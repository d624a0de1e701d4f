use rand::{rngs::StdRng, SeedableRng};

use crate::engine::{
    intent::{Intent, IntentLatch},
    session::{Session, Snapshot, TickOutcome},
    settings::{Settings, SettingsError},
};

/// Owns the current session and everything that outlives it: validated settings, pending intents, the random
/// source, and the best score seen since launch.
#[derive(Debug)]
pub struct Game {
    settings: Settings,
    session: Session,
    intents: IntentLatch,
    rng: StdRng,
    best_score: u32,
    sessions_played: u32,
}

impl Game {
    /// With a seed, pipe placement is fully reproducible for a given intent sequence.
    pub fn new(settings: Settings, seed: Option<u64>) -> Result<Self, SettingsError> {
        let session = Session::new(settings.clone())?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { settings, session, intents: IntentLatch::default(), rng, best_score: 0, sessions_played: 0 })
    }

    pub fn record(&mut self, intent: Intent) {
        self.intents.record(intent);
    }

    pub fn flap(&mut self) {
        self.record(Intent::Flap);
    }

    pub fn start(&mut self) {
        self.record(Intent::Start);
    }

    /// Consumes pending intents and runs one tick. A terminated session is replaced before this returns, so the
    /// next snapshot already shows the fresh one.
    pub fn advance(&mut self) -> TickOutcome {
        let pending = self.intents.take();
        // A start request on an idle session flaps too, the same as the first flap does.
        if pending.flap || (pending.start && !self.session.is_started()) {
            self.session.process_flap();
        }

        let outcome = self.session.tick(&mut self.rng);
        if let TickOutcome::Terminated(game_over) = outcome {
            self.best_score = self.best_score.max(game_over.score);
            self.reset_session();
        }
        outcome
    }

    pub fn reset_session(&mut self) {
        self.sessions_played += 1;
        self.session = Session::fresh(self.settings.clone());
        tracing::debug!(sessions_played = self.sessions_played, "session reset");
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.session.snapshot(self.best_score)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn sessions_played(&self) -> u32 {
        self.sessions_played
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::engine::{
        session::Cause,
        settings::SettingsBuilder,
    };

    fn game() -> Game {
        Game::new(Settings::default(), Some(7)).unwrap()
    }

    #[test]
    fn test_invalid_settings_fail_fast() {
        let settings = SettingsBuilder::default().field_height(100.0).build().unwrap();
        assert!(matches!(Game::new(settings, None), Err(SettingsError::GapTooLarge { .. })));
    }

    #[test]
    fn test_idle_until_intent() {
        let mut game = game();
        for _ in 0..100 {
            assert_eq!(game.advance(), TickOutcome::Idle);
        }
        assert!(!game.session().is_started());
        assert_eq!(game.session().bird().y, 300.0);
    }

    #[test]
    fn test_flap_intent_starts_and_ticks() {
        let mut game = game();
        game.flap();
        assert_eq!(game.advance(), TickOutcome::Running);
        assert!(game.session().is_started());
        // -3 impulse, then one step of gravity
        assert!((game.session().bird().velocity - (-2.9)).abs() < 1e-9);
        assert!((game.session().bird().y - 297.1).abs() < 1e-9);
    }

    #[test]
    fn test_start_intent_starts_and_flaps() {
        let mut game = game();
        game.start();
        assert_eq!(game.advance(), TickOutcome::Running);
        assert!(game.session().bird().velocity < 0.0);
    }

    #[test]
    fn test_start_intent_while_running_is_ignored() {
        let mut game = game();
        game.flap();
        game.advance();
        for _ in 0..20 {
            game.advance();
        }
        let velocity = game.session().bird().velocity;
        game.start();
        game.advance();
        assert!((game.session().bird().velocity - (velocity + 0.1)).abs() < 1e-9);
    }

    #[test]
    fn test_intents_consumed_once() {
        let mut game = game();
        game.flap();
        game.flap();
        game.flap();
        game.advance();
        let after_first = game.session().bird().velocity;
        game.advance();
        assert!((game.session().bird().velocity - (after_first + 0.1)).abs() < 1e-9);
    }

    #[test]
    fn test_floor_breach_resets_on_next_observable_state() {
        let mut game = game();
        game.start();
        let game_over = loop {
            match game.advance() {
                TickOutcome::Running => continue,
                TickOutcome::Terminated(game_over) => break game_over,
                TickOutcome::Idle => panic!("session went idle without terminating"),
            }
        };
        assert_eq!(game_over.cause, Cause::Floor);

        let snapshot = game.snapshot();
        assert!(!snapshot.started);
        assert!(snapshot.pipes.is_empty());
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.bird.y, 300.0);
        assert_eq!(snapshot.speed, 2.0);
        assert_eq!(game.session().spawn_counter(), 0);
        assert_eq!(game.sessions_played(), 1);
        assert_eq!(game.advance(), TickOutcome::Idle);
    }

    #[test]
    fn test_best_score_survives_reset() {
        let mut game = game();
        game.flap();
        game.advance();
        game.session.set_score(4);
        let game_over = loop {
            if let TickOutcome::Terminated(game_over) = game.advance() {
                break game_over;
            }
        };
        assert_eq!((game_over.cause, game_over.score), (Cause::Floor, 4));
        assert_eq!(game.best_score(), 4);
        assert_eq!(game.snapshot().best_score, 4);
        assert_eq!(game.snapshot().score, 0);
    }

    #[test]
    fn test_explicit_reset() {
        let mut game = game();
        game.flap();
        for _ in 0..10 {
            game.advance();
        }
        game.reset_session();
        assert!(!game.session().is_started());
        assert_eq!(game.session().ticks(), 0);
    }
}
