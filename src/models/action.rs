use super::HintRef;

/// One entry of a question's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user submitted this text as an answer.
    Guess { text: String },
    /// The user revealed a hint.
    HintReveal { hint: HintRef },
}

impl Action {
    pub fn guess_text(&self) -> Option<&str> {
        match self {
            Action::Guess { text } => Some(text),
            Action::HintReveal { .. } => None,
        }
    }

    pub fn revealed_hint(&self) -> Option<HintRef> {
        match self {
            Action::HintReveal { hint } => Some(*hint),
            Action::Guess { .. } => None,
        }
    }
}
