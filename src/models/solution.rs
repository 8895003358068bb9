use serde::Deserialize;

use super::Hint;

/// One accepted answer of a question, with its alternative spellings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub canonical_name: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
    #[serde(default)]
    pub hints: Vec<Hint>,
}

impl Solution {
    pub fn new(canonical_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            alternatives: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives = alternatives.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hints(mut self, hints: Vec<Hint>) -> Self {
        self.hints = hints;
        self
    }

    /// Whether `guess` names this solution, ignoring case.
    ///
    /// Surrounding whitespace is significant.
    pub fn matches(&self, guess: &str) -> bool {
        let guess = guess.to_uppercase();
        std::iter::once(&self.canonical_name)
            .chain(self.alternatives.iter())
            .any(|accepted| accepted.to_uppercase() == guess)
    }
}
