use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Circle, Rectangle},
        Block, BorderType, Paragraph,
    },
    Frame,
};

use crate::{
    constants::{game, START_PROMPT, TITLE},
    engine::{Renderer, Snapshot},
};

/// Draws a snapshot onto a ratatui [`Canvas`] whose bounds are the play field, flipped so that y grows downward like
/// it does in the engine.
pub struct CanvasRenderer<'f, 'a> {
    frame: &'f mut Frame<'a>,
    area: Rect,
    hint: &'f str,
}

impl<'f, 'a> CanvasRenderer<'f, 'a> {
    pub fn new(frame: &'f mut Frame<'a>, area: Rect, hint: &'f str) -> Self {
        Self { frame, area, hint }
    }
}

impl Renderer for CanvasRenderer<'_, '_> {
    fn render(&mut self, snapshot: Snapshot<'_>) {
        let height = snapshot.field_height;
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Line::from(format!(" {TITLE} ")).centered())
            .title_top(Line::from(format!(" Score: {} ", snapshot.score)).fg(game::SCORE_COLOR).right_aligned())
            .title_bottom(Line::from(format!(" Best: {} ", snapshot.best_score)).right_aligned());
        let inner = block.inner(self.area);

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([0.0, snapshot.field_width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for pipe in snapshot.pipes {
                    ctx.draw(&Rectangle {
                        x: pipe.x,
                        y: height - pipe.y,
                        width: snapshot.pipe_width,
                        height: pipe.y,
                        color: game::PIPE_COLOR,
                    });
                    ctx.draw(&Rectangle {
                        x: pipe.x,
                        y: 0.0,
                        width: snapshot.pipe_width,
                        height: height - pipe.gap_bottom(),
                        color: game::PIPE_COLOR,
                    });
                }
                ctx.layer();
                let bird = snapshot.bird;
                ctx.draw(&Circle { x: bird.x(), y: height - bird.y, radius: bird.radius, color: game::BIRD_COLOR });
            });
        self.frame.render_widget(canvas, self.area);

        if !snapshot.started {
            let [_, prompt_area, _] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(2), Constraint::Fill(1)]).areas(inner);
            let prompt = Paragraph::new(vec![
                Line::from(START_PROMPT).style(Style::default().fg(game::PROMPT_COLOR).bold()),
                Line::from(self.hint),
            ])
            .alignment(Alignment::Center);
            self.frame.render_widget(prompt, prompt_area);
        }
    }
}

/// Largest rect inside `area` with the play field's aspect ratio, centred. Terminal cells are about twice as tall as
/// they are wide.
pub fn fit_area(area: Rect, field_width: f64, field_height: f64) -> Rect {
    let ratio = field_width / field_height;
    let mut width = (f64::from(area.height) * 2.0 * ratio).round() as u16;
    let mut height = area.height;
    if width > area.width {
        width = area.width;
        height = (f64::from(width) / (2.0 * ratio)).round() as u16;
    }
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

    use super::*;
    use crate::engine::{Game, Settings};

    fn rows(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer.content.chunks(width).map(|row| row.iter().map(|cell| cell.symbol()).collect()).collect()
    }

    fn draw(game: &Game) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(64, 24)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                CanvasRenderer::new(f, area, "or press Space").render(game.snapshot());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_fit_area_limited_by_height() {
        assert_eq!(fit_area(Rect::new(0, 0, 100, 30), 800.0, 600.0), Rect::new(10, 0, 80, 30));
    }

    #[test]
    fn test_fit_area_limited_by_width() {
        assert_eq!(fit_area(Rect::new(0, 0, 40, 30), 800.0, 600.0), Rect::new(0, 7, 40, 15));
    }

    #[test]
    fn test_idle_frame_shows_prompt_and_score() {
        let game = Game::new(Settings::default(), Some(1)).unwrap();
        let rows = rows(&draw(&game));
        assert!(rows[0].contains("Flappy Floes"));
        assert!(rows[0].contains("Score: 0"));
        assert!(rows[23].contains("Best: 0"));
        assert!(rows.iter().any(|row| row.contains(START_PROMPT)));
        assert!(rows.iter().any(|row| row.contains("or press Space")));
    }

    #[test]
    fn test_running_frame_hides_prompt_and_draws_bird() {
        let mut game = Game::new(Settings::default(), Some(1)).unwrap();
        game.start();
        game.advance();
        let buffer = draw(&game);
        assert!(!rows(&buffer).iter().any(|row| row.contains(START_PROMPT)));
        assert!(buffer.content.iter().any(|cell| cell.fg == Color::Red && cell.symbol() != " "));
    }

    #[test]
    fn test_pipes_are_drawn_in_pipe_color() {
        let mut game = Game::new(Settings::default(), Some(1)).unwrap();
        game.start();
        for _ in 0..200 {
            game.flap();
            game.advance();
        }
        assert!(!game.session().pipes().is_empty());
        let buffer = draw(&game);
        assert!(buffer.content.iter().any(|cell| cell.fg == Color::LightGreen && cell.symbol() != " "));
    }
}
