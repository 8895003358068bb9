use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::quiz_title;
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let engine = app.engine();
    let title = quiz_title(engine).to_uppercase();
    let summary = format!(
        "{} Questions · {} Answers · {} Hints",
        engine.questions().len(),
        engine.total_number_of_solutions(),
        engine.total_number_of_hints()
    );

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(summary.fg(Color::DarkGray)),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
