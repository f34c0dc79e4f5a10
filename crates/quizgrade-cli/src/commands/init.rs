//! The `quizgrade init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizgrade.toml
    if std::path::Path::new("quizgrade.toml").exists() {
        println!("quizgrade.toml already exists, skipping.");
    } else {
        std::fs::write("quizgrade.toml", SAMPLE_CONFIG)?;
        println!("Created quizgrade.toml");
    }

    // Create sample quiz
    std::fs::create_dir_all("quizzes")?;
    let sample_path = std::path::Path::new("quizzes/sample.toml");
    if sample_path.exists() {
        println!("quizzes/sample.toml already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_QUIZ)?;
        println!("Created quizzes/sample.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizgrade validate --quiz quizzes/sample.toml");
    println!("  2. Run: quizgrade run --quiz quizzes/sample.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizgrade configuration

quiz_dir = "./quizzes"
format = "text"
show_hints = true
max_attempts = 3
"#;

const SAMPLE_QUIZ: &str = r#"[quiz]
id = "sample"
title = "Sample Quiz"
description = "One question of every kind"

[[questions]]
kind = "single_choice"
prompt = "What is the capital of France?"
answers = [
    { label = "A", text = "Berlin" },
    { label = "B", text = "Madrid" },
    { label = "C", text = "Paris", correct = true },
]

[[questions]]
kind = "multiple_choice"
prompt = "Which of the following are fruits?"
answers = [
    { label = "A", text = "Carrot" },
    { label = "B", text = "Apple", correct = true },
    { label = "C", text = "Tomato" },
    { label = "D", text = "Banana", correct = true },
]

[[questions]]
kind = "half_correct_choice"
prompt = "Select half of the correct options"
answers = [
    { label = "A", text = "Option A", correct = true },
    { label = "B", text = "Option B" },
    { label = "C", text = "Option C", correct = true },
]

[[questions]]
kind = "open_ended"
prompt = "What is the largest planet in our solar system?"
correct_answer = "Jupiter"

[[questions]]
kind = "chronology"
prompt = "Put the following events in chronological order"
answers = [
    { label = "A", text = "Beginning" },
    { label = "B", text = "Growth" },
    { label = "C", text = "Culmination" },
    { label = "D", text = "End" },
]
correct_order = ["A", "B", "C", "D"]

[[questions]]
kind = "matching"
prompt = "Match the following items"
pairs = [
    { left = "A", left_text = "Item A", right = "1", right_text = "Option 1" },
    { left = "B", left_text = "Item B", right = "2", right_text = "Option 2" },
    { left = "C", left_text = "Item C", right = "3", right_text = "Option 3" },
]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use quizgrade_core::grading::{Response, Verdict};
    use quizgrade_core::parser::{parse_quiz_str, validate_quiz};

    #[test]
    fn sample_quiz_is_valid() {
        let quiz = parse_quiz_str(SAMPLE_QUIZ, Path::new("sample.toml")).unwrap();
        assert_eq!(quiz.questions.len(), 6);
        assert!(validate_quiz(&quiz).is_empty());
    }

    #[test]
    fn sample_quiz_answers() {
        let quiz = parse_quiz_str(SAMPLE_QUIZ, Path::new("sample.toml")).unwrap();
        let responses = [
            Response::SingleChoice('C'),
            Response::MultipleChoice(vec!['B', 'D']),
            Response::HalfCorrectChoice(vec!['A']),
            Response::OpenEnded("Jupiter".into()),
            Response::Chronology(vec!['A', 'B', 'C', 'D']),
            Response::Matching(vec![('A', '1'), ('B', '2'), ('C', '3')]),
        ];
        for (question, response) in quiz.questions.iter().zip(&responses) {
            assert_eq!(question.grade(response).unwrap(), Verdict::Correct);
        }
    }

    #[test]
    fn sample_config_parses() {
        let config: crate::config::QuizgradeConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.max_attempts, 3);
    }
}
