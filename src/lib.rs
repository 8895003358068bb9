//! # guess-quiz
//!
//! A free-text quiz library for the terminal. Players type guesses, each
//! question may accept several answers, and every answer is worth fewer
//! points the more wrong guesses and hints it took to find it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use guess_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("quiz.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The scoring model can be driven without a terminal:
//!
//! ```rust
//! use guess_quiz::QuizEngine;
//!
//! let mut engine = QuizEngine::from_json_str(
//!     r#"{ "title": "Pets", "questions": [
//!         { "content": "Name a guinea pig", "solutions": [{ "canonicalName": "Nash" }] }
//!     ] }"#,
//! )?;
//! engine.submit_guess(0, "Edsel")?;
//! engine.submit_guess(0, "nash")?;
//! assert_eq!(engine.compute_total_points_earned(), 9);
//! # Ok::<(), guess_quiz::QuizError>(())
//! ```

mod app;
mod data;
mod engine;
mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;
use tracing::info;

pub use app::App;
pub use data::{DEFAULT_QUIZ_PATH, LoadError, QuizDocument, load_quiz_from_json, parse_quiz};
pub use engine::QuizEngine;
pub use models::{
    Action, AppState, BASE_POINTS, HINT_PENALTY, Hint, HintOwner, HintRef, Question,
    QuestionError, Solution, WRONG_GUESS_PENALTY,
};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error("question #{} does not exist", .0 + 1)]
    UnknownQuestion(usize),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a loaded engine.
    pub fn new(engine: QuizEngine) -> Self {
        Self {
            app: App::new(engine),
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use guess_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("quiz.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        Ok(Self::new(QuizEngine::from_json(path)?))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        info!(
            points = self.app.engine().compute_total_points_earned(),
            max_points = self.app.engine().max_points(),
            "quiz closed"
        );
        result
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.state {
        AppState::Welcome => handle_welcome_input(app, key.code),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key.code),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

// Printable keys belong to the guess input, so quiz commands use control keys.
fn handle_quiz_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.reveal_selected_hint()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.type_char(c),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Enter => app.commit_guess(),
        KeyCode::Tab => app.next_question(),
        KeyCode::BackTab => app.previous_question(),
        KeyCode::Down => app.select_next_hint(),
        KeyCode::Up => app.select_previous_hint(),
        KeyCode::Esc => app.finish_quiz(),
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
