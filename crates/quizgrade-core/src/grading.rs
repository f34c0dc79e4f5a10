//! Response shapes, verdicts, and the kind-dispatching grade entry point.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::QuestionKind;
use crate::question::Question;

/// An already-parsed submission, tagged with the question kind it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Response {
    SingleChoice(char),
    MultipleChoice(Vec<char>),
    HalfCorrectChoice(Vec<char>),
    OpenEnded(String),
    Chronology(Vec<char>),
    /// `(left_label, right_label)` links.
    Matching(Vec<(char, char)>),
}

impl Response {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Response::SingleChoice(_) => QuestionKind::SingleChoice,
            Response::MultipleChoice(_) => QuestionKind::MultipleChoice,
            Response::HalfCorrectChoice(_) => QuestionKind::HalfCorrectChoice,
            Response::OpenEnded(_) => QuestionKind::OpenEnded,
            Response::Chronology(_) => QuestionKind::Chronology,
            Response::Matching(_) => QuestionKind::Matching,
        }
    }
}

/// Outcome of grading one response. There is no partial credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl From<bool> for Verdict {
    fn from(correct: bool) -> Self {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_correct()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct"),
            Verdict::Incorrect => write!(f, "Incorrect"),
        }
    }
}

impl Question {
    /// Grade `response` with this question's rule.
    ///
    /// Fails only when `response` was shaped for a different kind of question.
    pub fn grade(&self, response: &Response) -> Result<Verdict, QuizError> {
        let correct = match (self, response) {
            (Question::SingleChoice(q), Response::SingleChoice(label)) => q.grade(*label),
            (Question::MultipleChoice(q), Response::MultipleChoice(labels)) => q.grade(labels),
            (Question::HalfCorrectChoice(q), Response::HalfCorrectChoice(labels)) => {
                q.grade(labels)
            }
            (Question::OpenEnded(q), Response::OpenEnded(text)) => q.grade(text),
            (Question::Chronology(q), Response::Chronology(order)) => q.grade(order),
            (Question::Matching(q), Response::Matching(links)) => q.grade(links),
            _ => {
                return Err(QuizError::ResponseMismatch {
                    expected: self.kind(),
                    found: response.kind(),
                })
            }
        };

        let verdict = Verdict::from(correct);
        tracing::debug!(kind = self.kind().as_str(), %verdict, "graded response");
        Ok(verdict)
    }
}
