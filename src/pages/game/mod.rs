mod canvas;

use std::collections::HashMap;

use color_eyre::eyre::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    Frame,
};

use super::{Page, PageId};
use crate::{
    action::{Action, GameAction},
    config::PageKeyBindings,
    engine::{driver, Game, TickOutcome},
};
pub use canvas::{fit_area, CanvasRenderer};

/// The only page: translates input into game intents and drives one engine frame per render.
pub struct GamePage {
    pub keymap: PageKeyBindings,
    game: Game,
    canvas: Rect,
    hint: String,
}

impl GamePage {
    pub fn new(game: Game) -> Self {
        GamePage {
            keymap: PageKeyBindings::default(),
            game,
            canvas: Rect::default(),
            hint: String::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn flap_hint(keymap: &PageKeyBindings) -> String {
        let keys = keymap.keys_for(&Action::Game(GameAction::Flap));
        if keys.is_empty() {
            String::new()
        } else {
            format!("or press {}", keys.join(" / "))
        }
    }
}

impl Page for GamePage {
    fn id(&self) -> PageId {
        PageId::Game
    }

    fn register_keymap(&mut self, keymaps: &HashMap<PageId, PageKeyBindings>) -> Result<()> {
        if let Some(keymap) = keymaps.get(&self.id()) {
            self.keymap = keymap.clone();
        }
        self.hint = Self::flap_hint(&self.keymap);
        Ok(())
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if self.canvas.contains(Position::new(mouse.column, mouse.row)) {
                return Ok(Some(Action::Game(GameAction::Start)));
            }
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::Game(game_action) = action {
            self.game.record(game_action.into());
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let settings = self.game.settings();
        let area = fit_area(area, settings.field_width, settings.field_height);
        self.canvas = area;

        let mut renderer = CanvasRenderer::new(f, area, &self.hint);
        if let TickOutcome::Terminated(game_over) = driver::frame(&mut self.game, &mut renderer) {
            let best = self.game.best_score();
            log::info!("Game over ({}) with score {}, best {}", game_over.cause, game_over.score, best);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::engine::Settings;

    fn page() -> GamePage {
        GamePage::new(Game::new(Settings::default(), Some(3)).unwrap())
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind: MouseEventKind::Down(MouseButton::Left), column, row, modifiers: KeyModifiers::empty() }
    }

    fn draw_frame(page: &mut GamePage, terminal: &mut Terminal<TestBackend>) {
        terminal
            .draw(|f| {
                let area = f.area();
                page.draw(f, area).unwrap();
            })
            .unwrap();
    }

    #[test]
    fn test_click_inside_canvas_starts() {
        let mut page = page();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        draw_frame(&mut page, &mut terminal);

        assert_eq!(page.handle_mouse_events(click(0, 0)).unwrap(), None);
        let action = page.handle_mouse_events(click(40, 15)).unwrap();
        assert_eq!(action, Some(Action::Game(GameAction::Start)));

        page.update(Action::Game(GameAction::Start)).unwrap();
        draw_frame(&mut page, &mut terminal);
        assert!(page.game().session().is_started());
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let mut page = page();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        draw_frame(&mut page, &mut terminal);

        let mut event = click(40, 15);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(page.handle_mouse_events(event).unwrap(), None);
        event.kind = MouseEventKind::Moved;
        assert_eq!(page.handle_mouse_events(event).unwrap(), None);
    }

    #[test]
    fn test_flap_starts_and_lifts_bird() {
        let mut page = page();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        page.update(Action::Game(GameAction::Flap)).unwrap();
        draw_frame(&mut page, &mut terminal);

        let session = page.game().session();
        assert!(session.is_started());
        assert!(session.bird().velocity < 0.0);
        assert!(session.bird().y < 300.0);
    }

    #[test]
    fn test_non_game_actions_do_not_touch_the_game() {
        let mut page = page();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        page.update(Action::Render).unwrap();
        page.update(Action::Resize(10, 10)).unwrap();
        draw_frame(&mut page, &mut terminal);
        assert!(!page.game().session().is_started());
    }

    #[test]
    fn test_hint_empty_without_flap_keys() {
        let mut page = page();
        page.register_keymap(&HashMap::new()).unwrap();
        assert_eq!(page.hint, "");
    }

    #[test]
    fn test_hint_lists_flap_keys() {
        let mut page = page();
        let mut keymap = PageKeyBindings::default();
        keymap.insert(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty()), Action::Game(GameAction::Flap));
        keymap.insert(KeyEvent::new(KeyCode::Up, KeyModifiers::empty()), Action::Game(GameAction::Flap));
        keymap.insert(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()), Action::Game(GameAction::Start));
        let keymaps = HashMap::from([(PageId::Game, keymap)]);
        page.register_keymap(&keymaps).unwrap();
        insta::assert_snapshot!(page.hint, @"or press Space / Up");
    }
}
