use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::{Hint, Question, QuestionError, Solution};

pub const DEFAULT_QUIZ_PATH: &str = "quiz.json";

/// Errors that reject a quiz document as a whole.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse quiz document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question #{} is malformed: {source}", .question + 1)]
    MalformedQuestion {
        question: usize,
        #[source]
        source: QuestionError,
    },

    #[error("quiz document must contain at least one question")]
    NoQuestions,
}

/// A validated quiz document. Always holds at least one question.
#[derive(Debug, Clone)]
pub struct QuizDocument {
    pub(crate) title: String,
    pub(crate) questions: Vec<Question>,
}

impl QuizDocument {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, LoadError> {
        if questions.is_empty() {
            return Err(LoadError::NoQuestions);
        }

        Ok(Self {
            title: title.into(),
            questions,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[derive(Deserialize)]
struct DocumentRecord {
    #[serde(default)]
    title: String,
    questions: Vec<QuestionRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    content: String,
    #[serde(default)]
    universal_hints: Vec<Hint>,
    solutions: Vec<Solution>,
}

pub fn load_quiz_from_json<P: AsRef<Path>>(path: P) -> Result<QuizDocument, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_quiz(&json_content)?;
    info!(
        path = %path.display(),
        title = %document.title,
        questions = document.questions.len(),
        "loaded quiz document"
    );
    Ok(document)
}

pub fn parse_quiz(json_content: &str) -> Result<QuizDocument, LoadError> {
    let record: DocumentRecord = serde_json::from_str(json_content)?;

    let questions = record
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| {
            Question::new(question.content, question.solutions, question.universal_hints)
                .map_err(|source| LoadError::MalformedQuestion {
                    question: index,
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    QuizDocument::new(record.title, questions)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_full_document() {
        let document = json!({
            "title": "Test Quiz",
            "questions": [
                {
                    "content": "Who designed the original quiz? (First name)",
                    "solutions": [{ "canonicalName": "Bailey", "alternatives": [], "hints": [] }]
                },
                {
                    "content": "What towns/cities has Avery lived in?",
                    "universalHints": ["All in the US"],
                    "solutions": [
                        { "canonicalName": "Elgin", "hints": [{ "text": "Illinois" }] },
                        { "canonicalName": "La Crosse", "alternatives": ["LaCrosse"] },
                        { "canonicalName": "Mystic" }
                    ]
                }
            ]
        });

        let quiz = parse_quiz(&document.to_string()).unwrap();
        assert_eq!(quiz.title(), "Test Quiz");
        assert_eq!(quiz.questions().len(), 2);

        let towns = &quiz.questions()[1];
        assert_eq!(towns.solutions().len(), 3);
        assert_eq!(towns.universal_hints(), &[Hint::new("All in the US")]);
        assert_eq!(towns.solutions()[0].hints[0].display_text(), "Illinois");
        assert_eq!(towns.solutions()[1].alternatives, vec!["LaCrosse"]);
        assert!(towns.solutions()[2].alternatives.is_empty());
        assert!(towns.solutions()[2].hints.is_empty());
        assert_eq!(towns.total_number_of_hints(), 2);
    }

    #[test]
    fn test_missing_canonical_name_is_rejected() {
        let document = json!({
            "title": "Broken",
            "questions": [{ "content": "?", "solutions": [{ "alternatives": ["x"] }] }]
        });
        let err = parse_quiz(&document.to_string()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().contains("canonicalName"));
    }

    #[test]
    fn test_malformed_question_names_its_position() {
        let document = json!({
            "title": "Broken",
            "questions": [
                { "content": "ok", "solutions": [{ "canonicalName": "Nash" }] },
                {
                    "content": "dup",
                    "solutions": [{ "canonicalName": "Nash" }, { "canonicalName": "nash" }]
                }
            ]
        });
        let err = parse_quiz(&document.to_string()).unwrap_err();
        match &err {
            LoadError::MalformedQuestion { question, source } => {
                assert_eq!(*question, 1);
                assert_eq!(*source, QuestionError::DuplicateCanonicalName("nash".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("question #2 is malformed"));
    }

    #[test]
    fn test_empty_documents_are_rejected() {
        let err = parse_quiz(r#"{ "title": "Empty", "questions": [] }"#).unwrap_err();
        assert!(matches!(err, LoadError::NoQuestions));

        let err = parse_quiz(
            r#"{ "title": "No solutions", "questions": [{ "content": "?", "solutions": [] }] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedQuestion { question: 0, source: QuestionError::NoSolutions }
        ));

        assert!(matches!(parse_quiz("not json").unwrap_err(), LoadError::Parse(_)));
    }

    #[test]
    fn test_document_without_questions_cannot_be_built() {
        let err = QuizDocument::new("Empty", Vec::new()).unwrap_err();
        assert!(matches!(err, LoadError::NoQuestions));

        let nash = Question::new("?", vec![Solution::new("Nash")], Vec::new()).unwrap();
        let document = QuizDocument::new("Pets", vec![nash]).unwrap();
        assert_eq!(document.title(), "Pets");
        assert_eq!(document.questions().len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let document = json!({
            "questions": [{ "content": "?", "solutions": [{ "canonicalName": "Nash" }] }]
        });
        write!(file, "{}", document).unwrap();

        let quiz = load_quiz_from_json(file.path()).unwrap();
        assert_eq!(quiz.title(), "");
        assert_eq!(quiz.questions()[0].solutions()[0].canonical_name, "Nash");
    }

    #[test]
    fn test_missing_file() {
        let err = load_quiz_from_json("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
