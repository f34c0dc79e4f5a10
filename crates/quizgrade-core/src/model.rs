//! Core data model types for quizgrade.
//!
//! These are the value types every question kind is assembled from: labeled
//! answer options, matching pairs, the closed set of question kinds, and the
//! quiz that groups questions together.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;
use crate::question::Question;

/// A labeled answer option with a correctness flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    label: char,
    text: String,
    is_correct: bool,
}

impl Answer {
    pub fn new(label: char, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            label,
            text: text.into(),
            is_correct,
        }
    }

    /// Single-character identifier shown before the text (e.g. `A`).
    pub fn label(&self) -> char {
        self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// One correct left/right association of a matching question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    left_label: char,
    left_text: String,
    right_label: char,
    right_text: String,
}

impl Pair {
    pub fn new(
        left_label: char,
        left_text: impl Into<String>,
        right_label: char,
        right_text: impl Into<String>,
    ) -> Self {
        Self {
            left_label,
            left_text: left_text.into(),
            right_label,
            right_text: right_text.into(),
        }
    }

    pub fn left_label(&self) -> char {
        self.left_label
    }

    pub fn left_text(&self) -> &str {
        &self.left_text
    }

    pub fn right_label(&self) -> char {
        self.right_label
    }

    pub fn right_text(&self) -> &str {
        &self.right_text
    }

    /// Returns `true` if this pair links `left` to `right`. Texts are ignored.
    pub fn matches(&self, left: char, right: char) -> bool {
        self.left_label == left && self.right_label == right
    }
}

/// The closed set of question kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    MultipleChoice,
    HalfCorrectChoice,
    OpenEnded,
    Chronology,
    Matching,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 6] = [
        QuestionKind::SingleChoice,
        QuestionKind::MultipleChoice,
        QuestionKind::HalfCorrectChoice,
        QuestionKind::OpenEnded,
        QuestionKind::Chronology,
        QuestionKind::Matching,
    ];

    /// Machine name used in quiz files (`single_choice`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "single_choice",
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::HalfCorrectChoice => "half_correct_choice",
            QuestionKind::OpenEnded => "open_ended",
            QuestionKind::Chronology => "chronology",
            QuestionKind::Matching => "matching",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::SingleChoice => write!(f, "Single Choice"),
            QuestionKind::MultipleChoice => write!(f, "Multiple Choice"),
            QuestionKind::HalfCorrectChoice => write!(f, "Half Correct Choice"),
            QuestionKind::OpenEnded => write!(f, "Open Ended"),
            QuestionKind::Chronology => write!(f, "Chronology"),
            QuestionKind::Matching => write!(f, "Matching"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        QuestionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| QuizError::UnknownKind(s.to_string()))
    }
}

/// A named, ordered collection of questions.
#[derive(Debug, Clone)]
pub struct Quiz {
    /// Unique identifier for this quiz.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Description of this quiz.
    pub description: String,
    /// The questions, in presentation order.
    pub questions: Vec<Question>,
}
