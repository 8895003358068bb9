mod loader;

pub use loader::{DEFAULT_QUIZ_PATH, LoadError, QuizDocument, load_quiz_from_json, parse_quiz};
