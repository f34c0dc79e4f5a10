//! Authoring API for questions.
//!
//! A [`QuestionBuilder`] collects the prompt and answer data for one question
//! kind. [`QuestionBuilder::build`] consumes it and returns the immutable
//! [`Question`]; no mutation is possible afterwards.
//!
//! ```
//! use quizgrade_core::builder::QuestionBuilder;
//!
//! let question = QuestionBuilder::single_choice("What is the capital of France?")
//!     .answer('A', "Berlin", false)
//!     .answer('C', "Paris", true)
//!     .build();
//! assert!(question.is_option_correct('C'));
//! ```

use crate::model::{Answer, Pair, QuestionKind};
use crate::question::{
    Chronology, HalfCorrectChoice, Matching, MultipleChoice, OpenEnded, Question, QuestionBase,
    SingleChoice,
};

/// Collects answer data for a question before it is frozen.
///
/// Data that the target kind does not use (e.g. pairs on a single-choice
/// builder) is dropped by [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct QuestionBuilder {
    kind: QuestionKind,
    prompt: String,
    answers: Vec<Answer>,
    correct_answer: String,
    correct_order: Vec<char>,
    pairs: Vec<Pair>,
}

impl QuestionBuilder {
    pub fn new(kind: QuestionKind, prompt: impl Into<String>) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
            answers: Vec::new(),
            correct_answer: String::new(),
            correct_order: Vec::new(),
            pairs: Vec::new(),
        }
    }

    pub fn single_choice(prompt: impl Into<String>) -> Self {
        Self::new(QuestionKind::SingleChoice, prompt)
    }

    pub fn multiple_choice(prompt: impl Into<String>) -> Self {
        Self::new(QuestionKind::MultipleChoice, prompt)
    }

    pub fn half_correct_choice(prompt: impl Into<String>) -> Self {
        Self::new(QuestionKind::HalfCorrectChoice, prompt)
    }

    pub fn open_ended(prompt: impl Into<String>) -> Self {
        Self::new(QuestionKind::OpenEnded, prompt)
    }

    pub fn chronology(prompt: impl Into<String>) -> Self {
        Self::new(QuestionKind::Chronology, prompt)
    }

    pub fn matching(prompt: impl Into<String>) -> Self {
        Self::new(QuestionKind::Matching, prompt)
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Append an option. Labels are not checked for uniqueness.
    pub fn answer(mut self, label: char, text: impl Into<String>, is_correct: bool) -> Self {
        self.answers.push(Answer::new(label, text, is_correct));
        self
    }

    /// Set the expected free-text answer (open-ended questions).
    pub fn correct_answer(mut self, answer: impl Into<String>) -> Self {
        self.correct_answer = answer.into();
        self
    }

    /// Set the expected item order (chronology questions). Replaces any
    /// previously set order.
    pub fn correct_order(mut self, order: impl IntoIterator<Item = char>) -> Self {
        self.correct_order = order.into_iter().collect();
        self
    }

    /// Append a correct association (matching questions).
    pub fn pair(
        mut self,
        left_label: char,
        left_text: impl Into<String>,
        right_label: char,
        right_text: impl Into<String>,
    ) -> Self {
        self.pairs
            .push(Pair::new(left_label, left_text, right_label, right_text));
        self
    }

    pub fn build(self) -> Question {
        let base = QuestionBase::new(self.prompt, self.answers);
        match self.kind {
            QuestionKind::SingleChoice => Question::SingleChoice(SingleChoice { base }),
            QuestionKind::MultipleChoice => Question::MultipleChoice(MultipleChoice { base }),
            QuestionKind::HalfCorrectChoice => {
                Question::HalfCorrectChoice(HalfCorrectChoice { base })
            }
            QuestionKind::OpenEnded => Question::OpenEnded(OpenEnded {
                base,
                correct_answer: self.correct_answer,
            }),
            QuestionKind::Chronology => Question::Chronology(Chronology {
                base,
                correct_order: self.correct_order,
            }),
            QuestionKind::Matching => Question::Matching(Matching {
                base,
                pairs: self.pairs,
            }),
        }
    }
}
