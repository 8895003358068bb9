mod action;
mod hint;
mod question;
mod solution;

pub use action::Action;
pub use hint::{Hint, HintOwner, HintRef};
pub use question::{BASE_POINTS, HINT_PENALTY, Question, QuestionError, WRONG_GUESS_PENALTY};
pub use solution::Solution;

/// Which screen the terminal UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
