use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A hint attached to a question or to one of its solutions.
///
/// The content is whatever the quiz author put in the document. It is kept
/// as raw JSON and only interpreted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hint {
    content: Value,
}

impl Hint {
    pub fn new(content: impl Into<Value>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    /// Text to show once the hint has been revealed.
    pub fn display_text(&self) -> String {
        match &self.content {
            Value::String(text) => text.clone(),
            Value::Object(fields) => match fields.get("text") {
                Some(Value::String(text)) => text.clone(),
                _ => self.content.to_string(),
            },
            other => other.to_string(),
        }
    }
}

/// Which list a hint lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintOwner {
    /// The question's universal hints.
    Universal,
    /// The hints of the solution at this index.
    Solution(usize),
}

/// Stable reference to a hint: its owning list plus the position in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HintRef {
    pub owner: HintOwner,
    pub index: usize,
}

impl HintRef {
    pub fn universal(index: usize) -> Self {
        Self {
            owner: HintOwner::Universal,
            index,
        }
    }

    pub fn solution(solution_index: usize, index: usize) -> Self {
        Self {
            owner: HintOwner::Solution(solution_index),
            index,
        }
    }
}

impl fmt::Display for HintRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner {
            HintOwner::Universal => write!(f, "universal hint #{}", self.index + 1),
            HintOwner::Solution(solution) => {
                write!(f, "hint #{} of solution #{}", self.index + 1, solution + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_text() {
        assert_eq!(Hint::new("Starts with N").display_text(), "Starts with N");
        assert_eq!(
            Hint::new(json!({ "text": "A car brand", "kind": "trivia" })).display_text(),
            "A car brand"
        );
        assert_eq!(Hint::new(json!({ "letters": 4 })).display_text(), "{\"letters\":4}");
        assert_eq!(Hint::new(json!(42)).display_text(), "42");
    }

    #[test]
    fn test_hint_is_passed_through() {
        let raw = json!({ "image": "nash.png", "caption": "Guinea pig" });
        let hint: Hint = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(hint.content(), &raw);
        assert_eq!(serde_json::to_value(&hint).unwrap(), raw);
    }
}
