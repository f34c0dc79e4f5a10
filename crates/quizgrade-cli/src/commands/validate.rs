//! The `quizgrade validate` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::load_config_from;

pub fn execute(quiz_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let quiz_path = match quiz_path {
        Some(path) => path,
        None => load_config_from(config_path.as_deref())?.quiz_dir,
    };

    let quizzes = if quiz_path.is_dir() {
        quizgrade_core::parser::load_quiz_directory(&quiz_path)?
    } else {
        vec![quizgrade_core::parser::parse_quiz(&quiz_path)?]
    };

    let mut total_warnings = 0;

    for quiz in &quizzes {
        println!("Quiz: {} ({} questions)", quiz.title, quiz.questions.len());

        let warnings = quizgrade_core::parser::validate_quiz(quiz);
        for w in &warnings {
            let prefix = w
                .question
                .map(|n| format!("  [Q{n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All quizzes valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
