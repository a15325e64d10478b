mod chat;
mod ending;
mod options;
mod sidebar;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, ClickTarget};
use crate::game::Lifeline;
use crate::models::NUM_OPTIONS;

/// Screen regions, shared by rendering and mouse hit-testing.
pub struct ScreenLayout {
    pub header: Rect,
    pub chat: Rect,
    pub options: [Rect; NUM_OPTIONS],
    pub input: Rect,
    pub lifeline_title: Rect,
    pub lifelines: [Rect; 3],
    pub ladder: Rect,
    pub confetti: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let [left, right] = Layout::horizontal([Constraint::Fill(3), Constraint::Min(30)])
            .spacing(1)
            .margin(1)
            .areas(area);

        let [header, chat, grid, input] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .areas(left);

        let rows = Layout::vertical([Constraint::Length(3); 2]).split(grid);
        let mut options = [Rect::default(); NUM_OPTIONS];
        for (row, row_area) in rows.iter().enumerate() {
            let cols = Layout::horizontal([Constraint::Fill(1); 2])
                .spacing(1)
                .split(*row_area);
            options[row * 2] = cols[0];
            options[row * 2 + 1] = cols[1];
        }

        let [lifeline_area, ladder, confetti] = Layout::vertical([
            Constraint::Length(10),
            Constraint::Min(12),
            Constraint::Length(8),
        ])
        .areas(right);

        let lifeline_rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(lifeline_area);
        let lifeline_title = lifeline_rows[0];
        let lifelines = [lifeline_rows[1], lifeline_rows[2], lifeline_rows[3]];

        Self {
            header,
            chat,
            options,
            input,
            lifeline_title,
            lifelines,
            ladder,
            confetti,
        }
    }

    /// The button under terminal cell `(column, row)`, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);

        if let Some(option) = self.options.iter().position(|r| r.contains(position)) {
            return Some(ClickTarget::Option(option));
        }

        self.lifelines
            .iter()
            .zip(Lifeline::ALL)
            .find(|(r, _)| r.contains(position))
            .map(|(_, lifeline)| ClickTarget::Lifeline(lifeline))
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let layout = ScreenLayout::new(area);

    chat::render_header(frame, layout.header, app);
    chat::render_log(frame, layout.chat, app);
    options::render(frame, &layout.options, app);
    chat::render_input(frame, layout.input, app);
    sidebar::render_lifelines(frame, layout.lifeline_title, &layout.lifelines, app);
    sidebar::render_ladder(frame, layout.ladder, app);
    sidebar::render_confetti(frame, layout.confetti, app);

    if let Some(ending) = app.ending() {
        ending::render(frame, area, ending);
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::{GameConfig, Pacing};
    use crate::data::load_builtin_deck;
    use crate::game::Session;
    use crate::models::PrizeLadder;

    fn started_app() -> App {
        let config = GameConfig {
            seed: Some(21),
            typing_speed: Duration::ZERO,
            bell: false,
            pacing: Pacing::instant(),
        };
        let session =
            Session::seeded(load_builtin_deck().unwrap(), PrizeLadder::default(), config.seed)
                .unwrap();
        let mut app = App::new(session, config);
        let now = Instant::now();
        app.start(now);
        for _ in 0..4 {
            app.tick(now);
        }
        app
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_panels() {
        let app = started_app();
        let screen = screen(&app);
        assert!(screen.contains("Lifelines"));
        assert!(screen.contains("Prize Ladder"));
        assert!(screen.contains("Q10:"));
        assert!(screen.contains("50-50"));
        let first_option = &app.session().current_question().options[0];
        assert!(screen.contains(&format!("a. {}", first_option)));
    }

    #[test]
    fn test_render_end_popup() {
        let mut app = started_app();
        let now = Instant::now();
        for c in "quit".chars() {
            app.push_input(c);
        }
        app.submit_input(now);
        let screen = screen(&app);
        assert!(screen.contains("Your total winning amount: ₹0"));
    }

    #[test]
    fn test_hit_test_finds_buttons() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 120, 40));
        let option = layout.options[3];
        assert_eq!(
            layout.hit_test(option.x + 1, option.y + 1),
            Some(ClickTarget::Option(3))
        );
        let flip = layout.lifelines[2];
        assert_eq!(
            layout.hit_test(flip.x, flip.y),
            Some(ClickTarget::Lifeline(Lifeline::Flip))
        );
        assert_eq!(layout.hit_test(0, 0), None);
    }
}
