use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::format_rupees;

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let header = Line::from(vec![
        Span::styled("KBC — Chat Host", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(
                "   Q{}/{}  ·  Winnings {}",
                session.question_number(),
                session.deck_len(),
                format_rupees(session.winnings())
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Chat transcript, pinned to the newest line.
pub fn render_log(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let paragraph = Paragraph::new(app.chat().transcript())
        .wrap(Wrap { trim: false })
        .fg(Color::Gray);
    let overflow = paragraph
        .line_count(inner.width)
        .saturating_sub(inner.height as usize);

    frame.render_widget(
        paragraph.block(block).scroll((overflow as u16, 0)),
        area,
    );
}

pub fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let input = app.input();
    let text = if input.is_empty() {
        Line::from("Type a / b / c / d — or 'quit'".fg(Color::DarkGray))
    } else {
        Line::from(format!("> {}", input).fg(Color::White))
    };

    let widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title_bottom(
                Line::from(" enter send · F1-F3 lifelines · esc exit ")
                    .fg(Color::DarkGray)
                    .right_aligned(),
            ),
    );
    frame.render_widget(widget, area);

    if app.ending().is_none() {
        let offset = if input.is_empty() { 0 } else { 2 + input.chars().count() as u16 };
        frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y + 1));
    }
}
