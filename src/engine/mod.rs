//! Headless simulation core: everything that decides what happens, nothing that decides how it looks.

pub mod bird;
pub mod driver;
pub mod game;
pub mod intent;
pub mod object;
pub mod pipe;
pub mod session;
pub mod settings;

pub use driver::{Driver, HeadlessDriver, Renderer};
pub use game::Game;
pub use intent::Intent;
pub use session::{Cause, GameOver, Snapshot, TickOutcome};
pub use settings::{Settings, SettingsError};
