use thiserror::Error;
use tracing::{debug, trace, warn};

use super::{Action, Hint, HintOwner, HintRef, Solution};

/// Points a solution is worth when found without any penalty.
pub const BASE_POINTS: u32 = 10;
/// Cost of a guess that matches no solution at all.
pub const WRONG_GUESS_PENALTY: u32 = 1;
/// Cost of revealing a hint for the solution or for the whole question.
pub const HINT_PENALTY: u32 = 2;

/// Errors raised while building or driving a question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question has no solutions")]
    NoSolutions,

    #[error("solution #{0} has an empty canonical name")]
    EmptyCanonicalName(usize),

    #[error("canonical name {0:?} is used by more than one solution")]
    DuplicateCanonicalName(String),

    #[error("{0} does not exist in this question")]
    UnknownHint(HintRef),
}

/// A free-text question and the history of everything the user did on it.
#[derive(Debug, Clone)]
pub struct Question {
    content: String,
    solutions: Vec<Solution>,
    universal_hints: Vec<Hint>,
    actions: Vec<Action>,
    input: String,
}

impl Question {
    /// Build a question, checking that every solution has a distinct,
    /// non-empty canonical name.
    pub fn new(
        content: impl Into<String>,
        solutions: Vec<Solution>,
        universal_hints: Vec<Hint>,
    ) -> Result<Self, QuestionError> {
        if solutions.is_empty() {
            return Err(QuestionError::NoSolutions);
        }

        for (index, solution) in solutions.iter().enumerate() {
            if solution.canonical_name.is_empty() {
                return Err(QuestionError::EmptyCanonicalName(index));
            }
            // Case-insensitive: a second spelling of the same name could never be found.
            if solutions[..index]
                .iter()
                .any(|earlier| earlier.matches(&solution.canonical_name))
            {
                return Err(QuestionError::DuplicateCanonicalName(
                    solution.canonical_name.clone(),
                ));
            }
        }

        Ok(Self {
            content: content.into(),
            solutions,
            universal_hints,
            actions: Vec::new(),
            input: String::new(),
        })
    }

    /// The same question with an empty history, for a new session.
    pub fn restarted(&self) -> Self {
        Self {
            content: self.content.clone(),
            solutions: self.solutions.clone(),
            universal_hints: self.universal_hints.clone(),
            actions: Vec::new(),
            input: String::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn universal_hints(&self) -> &[Hint] {
        &self.universal_hints
    }

    /// Everything the user did on this question, oldest first.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    // Input buffer

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    /// Submit the input buffer as a guess.
    ///
    /// An empty buffer is ignored. Otherwise the buffer is cleared, even when
    /// the guess was already recorded. Returns whether an action was appended.
    pub fn commit_input(&mut self) -> bool {
        if self.input.is_empty() {
            trace!("ignoring empty input");
            return false;
        }

        let guess = std::mem::take(&mut self.input);
        self.submit_guess(guess)
    }

    /// Record a guess unless it is empty or was already made verbatim.
    pub fn submit_guess(&mut self, guess: impl Into<String>) -> bool {
        let guess = guess.into();
        if guess.is_empty() {
            trace!("ignoring empty guess");
            return false;
        }
        if self.guesses().any(|previous| previous == guess) {
            trace!(guess = %guess, "ignoring repeated guess");
            return false;
        }

        debug!(
            guess = %guess,
            correct = self.guess_is_correct(&guess),
            "recorded guess"
        );
        self.actions.push(Action::Guess { text: guess });
        true
    }

    /// First solution, in declaration order, accepting `guess`.
    pub fn find_solution(&self, guess: &str) -> Option<&Solution> {
        self.solutions.iter().find(|solution| solution.matches(guess))
    }

    pub fn guess_is_correct(&self, guess: &str) -> bool {
        self.find_solution(guess).is_some()
    }

    /// Text of every guess, oldest first.
    pub fn guesses(&self) -> impl Iterator<Item = &str> + '_ {
        self.actions.iter().filter_map(Action::guess_text)
    }

    pub fn did_solve_solution(&self, solution: &Solution) -> bool {
        self.guesses().any(|guess| solution.matches(guess))
    }

    pub fn known_solutions(&self) -> Vec<&Solution> {
        self.solutions
            .iter()
            .filter(|solution| self.did_solve_solution(solution))
            .collect()
    }

    pub fn unknown_solutions(&self) -> Vec<&Solution> {
        self.solutions
            .iter()
            .filter(|solution| !self.did_solve_solution(solution))
            .collect()
    }

    pub fn has_unknown_solutions(&self) -> bool {
        self.solutions
            .iter()
            .any(|solution| !self.did_solve_solution(solution))
    }

    pub fn did_solve_all_solutions(&self) -> bool {
        !self.has_unknown_solutions()
    }

    /// The canonical name of the solution `guess` names, or `guess` itself.
    pub fn interpret_canonical_answer<'a>(&'a self, guess: &'a str) -> &'a str {
        self.find_solution(guess)
            .map_or(guess, |solution| solution.canonical_name.as_str())
    }

    // Hints

    pub fn hint(&self, hint: HintRef) -> Option<&Hint> {
        match hint.owner {
            HintOwner::Universal => self.universal_hints.get(hint.index),
            HintOwner::Solution(solution) => self.solutions.get(solution)?.hints.get(hint.index),
        }
    }

    /// All hints in display order: universal hints first, then each
    /// solution's own hints.
    pub fn hint_refs(&self) -> Vec<HintRef> {
        let universal = (0..self.universal_hints.len()).map(HintRef::universal);
        let per_solution = self
            .solutions
            .iter()
            .enumerate()
            .flat_map(|(solution, s)| {
                (0..s.hints.len()).map(move |index| HintRef::solution(solution, index))
            });
        universal.chain(per_solution).collect()
    }

    /// Reveal a hint. Every call is logged, including repeats.
    pub fn reveal_hint(&mut self, hint: HintRef) -> Result<&Hint, QuestionError> {
        if self.hint(hint).is_none() {
            warn!(%hint, "rejected reveal of unknown hint");
            return Err(QuestionError::UnknownHint(hint));
        }

        debug!(%hint, "revealed hint");
        self.actions.push(Action::HintReveal { hint });
        self.hint(hint).ok_or(QuestionError::UnknownHint(hint))
    }

    pub fn is_hint_shown(&self, hint: HintRef) -> bool {
        self.actions
            .iter()
            .any(|action| action.revealed_hint() == Some(hint))
    }

    pub fn total_number_of_hints(&self) -> usize {
        self.universal_hints.len()
            + self
                .solutions
                .iter()
                .map(|solution| solution.hints.len())
                .sum::<usize>()
    }

    pub fn shows_universal_hints_section(&self) -> bool {
        !self.universal_hints.is_empty()
    }

    // Scoring

    /// Penalty accumulated before `solution` was first guessed.
    ///
    /// Only actions preceding the winning guess count, so the score of a
    /// solution is fixed once it is found. Returns `None` while the solution
    /// is unsolved.
    pub fn total_penalty_for_solution(&self, solution: &Solution) -> Option<u32> {
        let own = self
            .solutions
            .iter()
            .position(|candidate| candidate.canonical_name == solution.canonical_name);

        let mut penalty = 0;
        for action in &self.actions {
            match action {
                Action::Guess { text } if solution.matches(text) => return Some(penalty),
                Action::Guess { text } => {
                    if !self.guess_is_correct(text) {
                        penalty += WRONG_GUESS_PENALTY;
                    }
                }
                Action::HintReveal { hint } => match hint.owner {
                    HintOwner::Universal => penalty += HINT_PENALTY,
                    HintOwner::Solution(index) if Some(index) == own => penalty += HINT_PENALTY,
                    HintOwner::Solution(_) => {}
                },
            }
        }

        None
    }

    pub fn compute_points_earned_for_solution(&self, solution: &Solution) -> u32 {
        self.total_penalty_for_solution(solution)
            .map_or(0, |penalty| BASE_POINTS.saturating_sub(penalty))
    }

    pub fn compute_points_earned_for_guess(&self, guess: &str) -> u32 {
        self.find_solution(guess)
            .map_or(0, |solution| self.compute_points_earned_for_solution(solution))
    }

    pub fn compute_total_points_earned(&self) -> u32 {
        self.solutions
            .iter()
            .map(|solution| self.compute_points_earned_for_solution(solution))
            .sum()
    }

    /// Points available if every solution is found without penalty.
    pub fn max_points(&self) -> u32 {
        BASE_POINTS * self.solutions.len() as u32
    }
}
