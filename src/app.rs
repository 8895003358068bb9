use tracing::warn;

use crate::engine::QuizEngine;
use crate::models::{AppState, HintRef, Question};

pub struct App {
    pub state: AppState,
    engine: QuizEngine,
    current_question_index: usize,
    selected_hint: usize,
    result_scroll: usize,
}

impl App {
    pub fn new(engine: QuizEngine) -> Self {
        Self {
            state: AppState::Welcome,
            engine,
            current_question_index: 0,
            selected_hint: 0,
            result_scroll: 0,
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn current_question(&self) -> &Question {
        &self.engine.questions()[self.current_question_index]
    }

    fn current_question_mut(&mut self) -> &mut Question {
        &mut self.engine.questions_mut()[self.current_question_index]
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.engine.questions().len()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn start_quiz(&mut self) {
        self.state = AppState::Quiz;
    }

    pub fn finish_quiz(&mut self) {
        self.state = AppState::Result;
        self.result_scroll = 0;
    }

    pub fn next_question(&mut self) {
        self.current_question_index = (self.current_question_index + 1) % self.total_questions();
        self.selected_hint = 0;
    }

    pub fn previous_question(&mut self) {
        let total = self.total_questions();
        self.current_question_index = (self.current_question_index + total - 1) % total;
        self.selected_hint = 0;
    }

    pub fn type_char(&mut self, c: char) {
        self.current_question_mut().push_input(c);
    }

    pub fn delete_char(&mut self) {
        self.current_question_mut().pop_input();
    }

    pub fn commit_guess(&mut self) {
        self.current_question_mut().commit_input();
    }

    /// The hint under the cursor, if the current question has any hints.
    pub fn selected_hint(&self) -> Option<HintRef> {
        self.current_question()
            .hint_refs()
            .get(self.selected_hint)
            .copied()
    }

    pub fn select_next_hint(&mut self) {
        let count = self.current_question().total_number_of_hints();
        if count > 0 {
            self.selected_hint = (self.selected_hint + 1) % count;
        }
    }

    pub fn select_previous_hint(&mut self) {
        let count = self.current_question().total_number_of_hints();
        if count > 0 {
            self.selected_hint = (self.selected_hint + count - 1) % count;
        }
    }

    pub fn reveal_selected_hint(&mut self) {
        let Some(hint) = self.selected_hint() else {
            return;
        };
        if let Err(err) = self.current_question_mut().reveal_hint(hint) {
            warn!(%err, "could not reveal selected hint");
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.engine.reset();
        self.state = AppState::Welcome;
        self.current_question_index = 0;
        self.selected_hint = 0;
        self.result_scroll = 0;
    }
}
