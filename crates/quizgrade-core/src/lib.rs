//! quizgrade-core — Question model and per-kind grading.
//!
//! This crate defines the answer/pair data model, the six question kinds
//! with their grading rules, and the TOML loader that the quizgrade driver
//! builds on. It performs no terminal I/O.

pub mod builder;
pub mod error;
pub mod grading;
pub mod model;
pub mod parser;
pub mod question;

pub use builder::QuestionBuilder;
pub use error::QuizError;
pub use grading::{Response, Verdict};
pub use model::{Answer, Pair, QuestionKind, Quiz};
pub use question::Question;
