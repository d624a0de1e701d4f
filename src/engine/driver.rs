use std::ops::ControlFlow;

use crate::engine::{
    game::Game,
    session::{Snapshot, TickOutcome},
};

/// Consumes a read-only snapshot after every update. There is no channel back into the game.
pub trait Renderer {
    fn render(&mut self, snapshot: Snapshot<'_>);
}

/// A host capability that calls a frame callback repeatedly, at whatever cadence the host has.
pub trait Driver {
    /// Runs `frame` until it breaks or the driver decides to stop.
    fn drive<F>(&mut self, frame: F)
    where
        F: FnMut() -> ControlFlow<()>;
}

/// One frame: update, then render the post-update state.
pub fn frame<V: Renderer + ?Sized>(game: &mut Game, renderer: &mut V) -> TickOutcome {
    let outcome = game.advance();
    renderer.render(game.snapshot());
    outcome
}

/// Drives `game` until the driver stops, handing every frame's outcome to `observe`.
pub fn run<D, V, O>(driver: &mut D, game: &mut Game, renderer: &mut V, mut observe: O)
where
    D: Driver,
    V: Renderer + ?Sized,
    O: FnMut(&mut Game, TickOutcome) -> ControlFlow<()>,
{
    driver.drive(|| {
        let outcome = frame(&mut *game, &mut *renderer);
        observe(&mut *game, outcome)
    });
}

/// Runs a fixed number of frames back to back, with no display attached.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessDriver {
    frames: u64,
    completed: u64,
}

impl HeadlessDriver {
    pub fn new(frames: u64) -> Self {
        Self { frames, completed: 0 }
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }
}

impl Driver for HeadlessDriver {
    fn drive<F>(&mut self, mut frame: F)
    where
        F: FnMut() -> ControlFlow<()>,
    {
        while self.completed < self.frames {
            self.completed += 1;
            if frame().is_break() {
                break;
            }
        }
    }
}
