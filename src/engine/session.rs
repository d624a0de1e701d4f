use std::collections::VecDeque;

use rand::Rng;
use strum::Display;

use crate::engine::{
    bird::Bird,
    pipe::Pipe,
    settings::{Settings, SettingsError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Cause {
    Floor,
    Pipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub cause: Cause,
    pub score: u32,
    pub ticks: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not started, nothing moved.
    Idle,
    Running,
    Terminated(GameOver),
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub started: bool,
    pub bird: &'a Bird,
    pub pipes: &'a VecDeque<Pipe>,
    pub pipe_width: f64,
    pub pipe_gap: f64,
    pub score: u32,
    pub best_score: u32,
    pub speed: f64,
    pub field_width: f64,
    pub field_height: f64,
}

/// One playthrough. Every field is owned here and only [`Session::tick`] and the two intent operations mutate it; a
/// finished session is thrown away and replaced by a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    settings: Settings,
    started: bool,
    bird: Bird,
    /// Oldest first, which is also lowest x first.
    pipes: VecDeque<Pipe>,
    score: u32,
    speed: f64,
    spawn_counter: u32,
    ticks: u64,
}

impl Session {
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::fresh(settings))
    }

    /// Callers guarantee `settings` already passed validation.
    pub(crate) fn fresh(settings: Settings) -> Self {
        let bird = Bird::new(settings.bird_x, settings.field_height / 2.0, settings.bird_radius);
        Session {
            started: false,
            bird,
            pipes: VecDeque::new(),
            score: 0,
            speed: settings.initial_speed,
            spawn_counter: 0,
            ticks: 0,
            settings,
        }
    }

    /// Returns whether this call actually started the session.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        tracing::info!("session started");
        true
    }

    pub fn process_flap(&mut self) {
        self.bird.flap(self.settings.flap_impulse);
        self.start();
    }

    /// Advances the simulation by exactly one step.
    ///
    /// Termination stops the step immediately: nothing after the failing check runs for this tick.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if !self.started {
            return TickOutcome::Idle;
        }
        self.ticks += 1;

        self.bird.integrate(self.settings.gravity);
        // There is deliberately no ceiling: the bird may leave the top of the field.
        if self.bird.bottom() > self.settings.field_height {
            return self.terminate(Cause::Floor);
        }

        self.spawn_counter += 1;
        if self.spawn_counter == self.settings.spawn_interval {
            self.spawn_pipe(rng);
            self.spawn_counter = 0;
        }

        // Pipes scroll at the fixed pipe speed; the growing session speed is tracked but not applied.
        for pipe in self.pipes.iter_mut() {
            pipe.advance(self.settings.pipe_speed);
        }
        let before = self.pipes.len();
        self.pipes.retain(|pipe| !pipe.is_off_field());
        let cleared = before - self.pipes.len();
        if cleared > 0 {
            self.score += cleared as u32;
            tracing::debug!(score = self.score, cleared, "pipes cleared");
        }

        if self.pipes.iter().any(|pipe| pipe.collides_with(&self.bird)) {
            return self.terminate(Cause::Pipe);
        }

        self.speed += self.settings.speed_increment;
        TickOutcome::Running
    }

    fn spawn_pipe<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let gap = self.settings.pipe_gap;
        let y = rng.gen_range(gap..=self.settings.field_height - gap);
        tracing::debug!(y, tick = self.ticks, "spawning pipe");
        self.pipes.push_back(Pipe::new(self.settings.field_width, y, self.settings.pipe_width, gap));
    }

    fn terminate(&mut self, cause: Cause) -> TickOutcome {
        self.started = false;
        let game_over = GameOver { cause, score: self.score, ticks: self.ticks };
        tracing::info!(%cause, score = self.score, ticks = self.ticks, "game over");
        TickOutcome::Terminated(game_over)
    }

    /// `best_score` outlives the session, so the owner supplies it.
    pub fn snapshot(&self, best_score: u32) -> Snapshot<'_> {
        Snapshot {
            started: self.started,
            bird: &self.bird,
            pipes: &self.pipes,
            pipe_width: self.settings.pipe_width,
            pipe_gap: self.settings.pipe_gap,
            score: self.score,
            best_score: best_score.max(self.score),
            speed: self.speed,
            field_width: self.settings.field_width,
            field_height: self.settings.field_height,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &VecDeque<Pipe> {
        &self.pipes
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn spawn_counter(&self) -> u32 {
        self.spawn_counter
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
impl Session {
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
