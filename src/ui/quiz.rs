use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::panel;
use crate::app::App;
use crate::models::{HintOwner, Question};

const HIDDEN_ANSWER: &str = "???";
const HIDDEN_HINT: &str = "•••  ctrl-r to reveal";
const CONTROLS: &str =
    "enter guess  ·  tab next question  ·  ↑/↓ pick hint  ·  ctrl-r reveal  ·  esc finish";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.current_question();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], question.content());

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(1)
        .split(chunks[2]);
    let left = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    render_solutions(frame, left[0], question);
    render_guesses(frame, left[1], question);
    render_hints(frame, columns[1], app);
    render_input(frame, chunks[3], question.input());
    render_controls(frame, chunks[4]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let progress = Line::from(vec![
        Span::styled(
            format!("{}/{}", app.current_question_number(), app.total_questions()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   "),
        Span::styled(
            format!(
                "{} / {} pts",
                engine.compute_total_points_earned(),
                engine.max_points()
            ),
            Style::default().fg(Color::Yellow).bold(),
        ),
    ]);
    let widget = Paragraph::new(progress).alignment(Alignment::Right);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_solutions(frame: &mut Frame, area: Rect, question: &Question) {
    let lines: Vec<Line> = question
        .solutions()
        .iter()
        .map(|solution| {
            if question.did_solve_solution(solution) {
                let points = question.compute_points_earned_for_solution(solution);
                Line::from(vec![
                    Span::styled(" + ", Style::default().fg(Color::Green)),
                    Span::styled(
                        solution.canonical_name.as_str(),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("  {} pts", points),
                        Style::default().fg(Color::Yellow),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(" ? ", Style::default().fg(Color::DarkGray)),
                    Span::styled(HIDDEN_ANSWER, Style::default().fg(Color::DarkGray)),
                ])
            }
        })
        .collect();

    let title = format!(
        "Answers {}/{}",
        question.known_solutions().len(),
        question.solutions().len()
    );
    frame.render_widget(Paragraph::new(lines).block(panel(&title)), area);
}

fn render_guesses(frame: &mut Frame, area: Rect, question: &Question) {
    let lines: Vec<Line> = question
        .guesses()
        .map(|guess| {
            if question.guess_is_correct(guess) {
                let canonical = question.interpret_canonical_answer(guess);
                let mut spans = vec![
                    Span::styled(" + ", Style::default().fg(Color::Green)),
                    Span::styled(guess, Style::default().fg(Color::Green)),
                ];
                if canonical != guess {
                    spans.push(Span::styled(
                        format!("  → {}", canonical),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                Line::from(spans)
            } else {
                Line::from(vec![
                    Span::styled(" - ", Style::default().fg(Color::Red)),
                    Span::styled(guess, Style::default().fg(Color::Gray)),
                ])
            }
        })
        .collect();

    // Keep the newest guesses in view.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let widget = Paragraph::new(lines)
        .block(panel("Guesses"))
        .scroll((scroll, 0));
    frame.render_widget(widget, area);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.current_question();
    let selected = app.selected_hint();
    let mut lines: Vec<Line> = Vec::new();
    let mut current_owner = None;

    for hint_ref in question.hint_refs() {
        if current_owner != Some(hint_ref.owner) {
            if current_owner.is_some() {
                lines.push(Line::from(""));
            }
            let header = match hint_ref.owner {
                HintOwner::Universal => "Question".to_string(),
                HintOwner::Solution(index) => format!("Answer #{}", index + 1),
            };
            lines.push(Line::from(Span::styled(
                header,
                Style::default().fg(Color::DarkGray).bold(),
            )));
            current_owner = Some(hint_ref.owner);
        }

        let is_selected = selected == Some(hint_ref);
        let marker = if is_selected { ">" } else { " " };
        let marker_style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default()
        };

        let text = match question.hint(hint_ref) {
            Some(hint) if question.is_hint_shown(hint_ref) => {
                Span::styled(hint.display_text(), Style::default().fg(Color::White))
            }
            _ => Span::styled(HIDDEN_HINT, Style::default().fg(Color::DarkGray)),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), marker_style),
            text,
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from("No hints for this question".fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Hints"));
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let widget = Paragraph::new(input)
        .fg(Color::White)
        .block(panel("Your guess"));
    frame.render_widget(widget, area);

    // border + padding on the left, border on top
    let cursor_x = area.x + 2 + input.chars().count() as u16;
    let cursor_y = area.y + 1;
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), cursor_y));
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(CONTROLS)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
