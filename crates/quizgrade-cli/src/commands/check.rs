//! The `quizgrade check` command.

use std::path::PathBuf;

use anyhow::Result;

use quizgrade_core::parser;

use crate::input::parse_response;

pub fn execute(quiz_path: PathBuf, number: usize, answer: String) -> Result<()> {
    let quiz = parser::parse_quiz(&quiz_path)?;

    let count = quiz.questions.len();
    let Some(question) = number.checked_sub(1).and_then(|i| quiz.questions.get(i)) else {
        anyhow::bail!("question {number} out of range, quiz has {count} question(s)");
    };

    let response = parse_response(question.kind(), &answer)?;
    let verdict = question.grade(&response)?;
    println!("{verdict}");

    Ok(())
}
