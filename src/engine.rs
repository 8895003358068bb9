//! The quiz session: every question of a document plus the commands and
//! queries a view layer needs.

use std::path::Path;

use tracing::info;

use crate::QuizError;
use crate::data::{QuizDocument, load_quiz_from_json, parse_quiz};
use crate::models::{HintRef, Question, Solution};

#[derive(Debug, Clone)]
pub struct QuizEngine {
    title: String,
    questions: Vec<Question>,
}

impl QuizEngine {
    /// Start a session over a validated document.
    pub fn new(document: QuizDocument) -> Self {
        Self {
            title: document.title,
            questions: document.questions,
        }
    }

    /// Load and validate a quiz document from disk.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        Ok(Self::new(load_quiz_from_json(path)?))
    }

    /// Build an engine from an in-memory quiz document.
    pub fn from_json_str(json: &str) -> Result<Self, QuizError> {
        Ok(Self::new(parse_quiz(json)?))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub(crate) fn questions_mut(&mut self) -> &mut [Question] {
        &mut self.questions
    }

    pub fn question(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions
            .get(index)
            .ok_or(QuizError::UnknownQuestion(index))
    }

    pub fn question_mut(&mut self, index: usize) -> Result<&mut Question, QuizError> {
        self.questions
            .get_mut(index)
            .ok_or(QuizError::UnknownQuestion(index))
    }

    /// Move a question's input buffer into its guesses.
    pub fn commit_question_input(&mut self, index: usize) -> Result<bool, QuizError> {
        Ok(self.question_mut(index)?.commit_input())
    }

    pub fn submit_guess(&mut self, index: usize, guess: &str) -> Result<bool, QuizError> {
        Ok(self.question_mut(index)?.submit_guess(guess))
    }

    pub fn reveal_hint(&mut self, index: usize, hint: HintRef) -> Result<(), QuizError> {
        self.question_mut(index)?.reveal_hint(hint)?;
        Ok(())
    }

    /// Whether one of the question's guesses names any of its solutions.
    pub fn evaluate_answer(&self, index: usize, guess: &str) -> Result<bool, QuizError> {
        Ok(self.question(index)?.guess_is_correct(guess))
    }

    pub fn guess_is_valid_for_solution(&self, guess: &str, solution: &Solution) -> bool {
        solution.matches(guess)
    }

    pub fn compute_total_points_earned(&self) -> u32 {
        self.questions
            .iter()
            .map(Question::compute_total_points_earned)
            .sum()
    }

    pub fn max_points(&self) -> u32 {
        self.questions.iter().map(Question::max_points).sum()
    }

    pub fn total_number_of_hints(&self) -> usize {
        self.questions
            .iter()
            .map(Question::total_number_of_hints)
            .sum()
    }

    pub fn total_number_of_solutions(&self) -> usize {
        self.questions.iter().map(|q| q.solutions().len()).sum()
    }

    /// Start a new session over the same questions.
    pub fn reset(&mut self) {
        info!(
            points = self.compute_total_points_earned(),
            "restarting quiz session"
        );
        self.questions = self.questions.iter().map(Question::restarted).collect();
    }
}
