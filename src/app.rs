use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    action::Action,
    config::{Config, KeyBindings},
    engine::Game,
    pages::{game::GamePage, Page, PageId},
    tui,
};

pub struct App {
    config: Config,
    render_period: Duration,
    should_quit: bool,
    should_suspend: bool,
    page: GamePage,
}

/// Time between two frames at `frame_rate` frames per second. Rates whose period is zero or does not fit in a
/// [`Duration`] are rejected.
pub fn render_period(frame_rate: f64) -> Result<Duration> {
    if !frame_rate.is_finite() || frame_rate <= 0.0 {
        return Err(eyre!("frame rate must be a positive number, got {frame_rate}"));
    }
    match Duration::try_from_secs_f64(1.0 / frame_rate) {
        Ok(period) if !period.is_zero() => Ok(period),
        _ => Err(eyre!("frame rate {frame_rate} is out of range")),
    }
}

/// The action a terminal event asks for, before the page sees the event.
fn event_action(keybindings: &KeyBindings, page: &PageId, event: &tui::Event) -> Option<Action> {
    match event {
        tui::Event::Closed => Some(Action::Quit),
        tui::Event::Render => Some(Action::Render),
        tui::Event::Resize(x, y) => Some(Action::Resize(*x, *y)),
        tui::Event::Error => Some(Action::Error("Failed to read terminal input".to_string())),
        tui::Event::Key(key) => keybindings.lookup(page, key).cloned(),
        tui::Event::Mouse(_) => None,
    }
}

impl App {
    pub fn new(frame_rate: f64, seed: Option<u64>) -> Result<Self> {
        let render_period = render_period(frame_rate)?;
        let config = Config::new()?;
        let game = Game::new(config.game.clone(), seed)?;
        log::info!("Starting with {:?}", game.settings());

        Ok(Self { config, render_period, should_quit: false, should_suspend: false, page: GamePage::new(game) })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new(self.render_period)?;
        tui.enter()?;

        self.page.register_keymap(&self.config.keybindings.pages)?;

        loop {
            if let Some(e) = tui.next().await {
                if let Some(action) = event_action(&self.config.keybindings, &self.page.id(), &e) {
                    if let tui::Event::Key(_) = e {
                        log::info!("Got action: {action:?}");
                    }
                    action_tx.send(action)?;
                }
                if let Some(action) = self.page.handle_events(Some(e))? {
                    action_tx.send(action)?;
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Render {
                    log::debug!("{action:?}");
                }
                match &action {
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::Resize(w, h) => tui.resize(Rect::new(0, 0, *w, *h))?,
                    Action::Render => self.render(&mut tui)?,
                    Action::Error(msg) => log::error!("{msg}"),
                    Action::Game(_) => {},
                }
                if let Some(action) = self.page.update(action)? {
                    action_tx.send(action)?
                }
            }
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui.resume()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        log::info!(
            "Leaving after {} finished sessions, best score {}",
            self.page.game().sessions_played(),
            self.page.game().best_score()
        );
        Ok(())
    }

    /// Each render is one engine frame: the page advances the game and then draws it.
    fn render(&mut self, tui: &mut tui::Tui) -> Result<()> {
        let mut drawn = Ok(());
        tui.draw(|f| {
            let area = f.area();
            drawn = self.page.draw(f, area);
        })?;
        drawn
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::action::GameAction;

    #[test]
    fn test_render_period_at_common_rates() {
        assert_eq!(render_period(60.0).unwrap(), Duration::from_secs_f64(1.0 / 60.0));
        assert_eq!(render_period(0.5).unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn test_render_period_rejects_non_positive() {
        assert!(render_period(0.0).is_err());
        assert!(render_period(-30.0).is_err());
        assert!(render_period(f64::NAN).is_err());
        assert!(render_period(f64::INFINITY).is_err());
    }

    #[test]
    fn test_huge_frame_rate_rejected() {
        assert!(render_period(1e10).is_err());
        assert!(App::new(1e10, None).is_err());
    }

    #[test]
    fn test_tiny_frame_rate_rejected() {
        assert!(render_period(1e-30).is_err());
        assert!(App::new(1e-30, None).is_err());
    }

    #[test]
    fn test_closed_input_quits() {
        let bindings = KeyBindings::default();
        assert_eq!(event_action(&bindings, &PageId::Game, &tui::Event::Closed), Some(Action::Quit));
        assert_eq!(event_action(&bindings, &PageId::Game, &tui::Event::Render), Some(Action::Render));
    }

    #[test]
    fn test_keys_go_through_bindings() {
        let mut bindings = KeyBindings::default();
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty());
        bindings.pages.entry(PageId::Game).or_default().insert(space, Action::Game(GameAction::Flap));

        let flap = event_action(&bindings, &PageId::Game, &tui::Event::Key(space));
        assert_eq!(flap, Some(Action::Game(GameAction::Flap)));
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty());
        assert_eq!(event_action(&bindings, &PageId::Game, &tui::Event::Key(other)), None);
    }
}
