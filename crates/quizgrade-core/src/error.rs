//! Quiz error types.
//!
//! Grading itself never fails. These errors cover the edges of the core:
//! handing a question a response of the wrong kind, and quiz definitions
//! that cannot be turned into questions.

use thiserror::Error;

use crate::model::QuestionKind;

/// Errors raised at the boundary of the grading core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The response shape belongs to a different question kind.
    #[error("response mismatch: {expected} question cannot grade a {found} response")]
    ResponseMismatch {
        expected: QuestionKind,
        found: QuestionKind,
    },

    /// A label in a quiz definition was not exactly one character.
    #[error("question {question}: invalid label {value:?}, expected a single character")]
    InvalidLabel { question: usize, value: String },

    /// The quiz definition named a question kind that does not exist.
    #[error("unknown question kind: {0}")]
    UnknownKind(String),
}
