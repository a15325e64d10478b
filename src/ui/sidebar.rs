//! Right-hand panel: lifelines, prize ladder and confetti.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Rectangle},
        Block, BorderType, Borders, List, ListItem, Paragraph,
    },
};

use crate::anim::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::app::App;
use crate::game::Lifeline;
use crate::models::format_rupees;

const KEYS: [&str; 3] = ["F1", "F2", "F3"];

pub fn render_lifelines(frame: &mut Frame, title: Rect, areas: &[Rect; 3], app: &App) {
    frame.render_widget(
        Paragraph::new("Lifelines").style(Style::default().fg(Color::White).bold()),
        title,
    );

    let registry = app.session().lifelines();
    for ((area, lifeline), key) in areas.iter().zip(Lifeline::ALL).zip(KEYS) {
        let style = if registry.is_available(lifeline) {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::DarkGray).crossed_out()
        };

        let widget = Paragraph::new(format!("[{}] {}", key, lifeline.label()))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Color::DarkGray),
            );
        frame.render_widget(widget, *area);
    }
}

/// Ladder from the top prize down, with the current tier in gold.
pub fn render_ladder(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let current = session.question_number();

    let items: Vec<ListItem> = session
        .ladder()
        .rungs_descending()
        .map(|(number, prize)| {
            let style = if number == current {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::LightCyan)
            };
            let line = Line::from(format!("Q{}:  {}", number, format_rupees(prize)))
                .style(style)
                .right_aligned();
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Prize Ladder ")
            .title_style(Style::default().fg(Color::White).bold()),
    );
    frame.render_widget(list, area);
}

pub fn render_confetti(frame: &mut Frame, area: Rect, app: &App) {
    let particles = app.confetti().particles();

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).border_style(Color::DarkGray))
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(|ctx| {
            for p in particles {
                // Canvas y grows upwards; particles fall downwards.
                ctx.draw(&Rectangle {
                    x: p.x - p.size / 2.0,
                    y: CANVAS_HEIGHT - p.y - p.size / 2.0,
                    width: p.size,
                    height: p.size,
                    color: p.color,
                });
            }
        });
    frame.render_widget(canvas, area);
}
