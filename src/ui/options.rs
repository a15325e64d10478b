use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, OptionStyle};
use crate::models::{option_label, NUM_OPTIONS};

pub fn render(frame: &mut Frame, areas: &[Rect; NUM_OPTIONS], app: &App) {
    let question = app.session().current_question();

    for (index, area) in areas.iter().enumerate() {
        let style = app.option_style(index);
        let label = match style {
            OptionStyle::Hidden => String::new(),
            OptionStyle::Eliminated => format!("{}. X", option_label(index)),
            _ => format!("{}. {}", option_label(index), question.options[index]),
        };

        let (text_style, border_color) = button_style(style);
        let widget = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(text_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_color),
            );
        frame.render_widget(widget, *area);
    }
}

fn button_style(style: OptionStyle) -> (Style, Color) {
    match style {
        OptionStyle::Hidden => (Style::default(), Color::DarkGray),
        OptionStyle::Normal => (Style::default().fg(Color::White).bold(), Color::Blue),
        OptionStyle::Eliminated => (Style::default().fg(Color::DarkGray), Color::DarkGray),
        OptionStyle::Selected => (
            Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
            Color::Yellow,
        ),
        OptionStyle::Correct => (
            Style::default().fg(Color::White).bg(Color::Green).bold(),
            Color::Green,
        ),
        OptionStyle::Wrong => (
            Style::default().fg(Color::White).bg(Color::Red).bold(),
            Color::Red,
        ),
    }
}
