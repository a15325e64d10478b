use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::Ending;
use crate::game::Outcome;
use crate::models::format_rupees;

const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect, ending: Ending) {
    let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);
    let amount = format_rupees(ending.winnings);

    let (title, headline, color) = match ending.outcome {
        Outcome::Completed => (" Winner ", format!("YOU WON {}", amount), Color::Yellow),
        Outcome::WrongAnswer | Outcome::Quit => (
            " Game Over ",
            format!("Your total winning amount: {}", amount),
            Color::Cyan,
        ),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(headline, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from("press any key to exit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(color)
            .title(title)
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
