mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding},
};

use crate::app::App;
use crate::engine::QuizEngine;
use crate::models::AppState;

const UNTITLED: &str = "Quiz";

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

/// Bordered panel with a cyan title, shared by the quiz screen's sections.
fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}

/// The document title, or a generic one when the document has none.
fn quiz_title(engine: &QuizEngine) -> &str {
    if engine.title().is_empty() {
        UNTITLED
    } else {
        engine.title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_title_fallback() {
        let untitled = QuizEngine::from_json_str(
            r#"{ "questions": [{ "content": "?", "solutions": [{ "canonicalName": "Nash" }] }] }"#,
        )
        .unwrap();
        assert_eq!(quiz_title(&untitled), "Quiz");

        let titled = QuizEngine::from_json_str(
            r#"{ "title": "Pets",
                 "questions": [{ "content": "?", "solutions": [{ "canonicalName": "Nash" }] }] }"#,
        )
        .unwrap();
        assert_eq!(quiz_title(&titled), "Pets");
    }
}
