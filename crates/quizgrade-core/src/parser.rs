//! TOML quiz parser.
//!
//! Loads quizzes from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::builder::QuestionBuilder;
use crate::error::QuizError;
use crate::model::{QuestionKind, Quiz};
use crate::question::Question;

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    kind: String,
    prompt: String,
    #[serde(default)]
    answers: Vec<TomlAnswer>,
    #[serde(default)]
    correct_answer: Option<String>,
    #[serde(default)]
    correct_order: Vec<String>,
    #[serde(default)]
    pairs: Vec<TomlPair>,
}

#[derive(Debug, Deserialize)]
struct TomlAnswer {
    label: String,
    text: String,
    #[serde(default)]
    correct: bool,
}

#[derive(Debug, Deserialize)]
struct TomlPair {
    left: String,
    #[serde(default)]
    left_text: String,
    right: String,
    #[serde(default)]
    right_text: String,
}

/// Parse a single TOML file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(i, q)| build_question(i + 1, q))
        .collect::<Result<Vec<_>, QuizError>>()
        .with_context(|| format!("invalid quiz: {}", source_path.display()))?;

    tracing::debug!(
        quiz = %parsed.quiz.id,
        questions = questions.len(),
        "parsed quiz"
    );

    Ok(Quiz {
        id: parsed.quiz.id,
        title: parsed.quiz.title,
        description: parsed.quiz.description,
        questions,
    })
}

fn build_question(index: usize, q: TomlQuestion) -> Result<Question, QuizError> {
    let kind: QuestionKind = q.kind.parse()?;
    let mut builder = QuestionBuilder::new(kind, q.prompt);

    for answer in q.answers {
        builder = builder.answer(label(index, &answer.label)?, answer.text, answer.correct);
    }
    if let Some(text) = q.correct_answer {
        builder = builder.correct_answer(text);
    }
    let order = q
        .correct_order
        .iter()
        .map(|l| label(index, l))
        .collect::<Result<Vec<_>, _>>()?;
    builder = builder.correct_order(order);
    for pair in q.pairs {
        builder = builder.pair(
            label(index, &pair.left)?,
            pair.left_text,
            label(index, &pair.right)?,
            pair.right_text,
        );
    }

    Ok(builder.build())
}

fn label(question: usize, value: &str) -> Result<char, QuizError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(QuizError::InvalidLabel {
            question,
            value: value.to_string(),
        }),
    }
}

/// Recursively load all `.toml` quiz files from a directory.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    quizzes.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(quizzes)
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question index (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a quiz for authoring mistakes. Nothing here prevents grading.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.questions.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "quiz has no questions".into(),
        });
    }

    for (i, question) in quiz.questions.iter().enumerate() {
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                question: Some(i + 1),
                message,
            })
        };

        if question.prompt().trim().is_empty() {
            warn("prompt is empty".into());
        }

        let mut seen = HashSet::new();
        for answer in question.answers() {
            if !seen.insert(answer.label()) {
                warn(format!(
                    "duplicate option label '{}', only the first is graded",
                    answer.label()
                ));
            }
        }

        let base = question.base();
        match question {
            Question::SingleChoice(_) => {
                if base.answers().is_empty() {
                    warn("choice question has no options".into());
                }
                let correct = base.correct_count();
                if correct != 1 {
                    warn(format!(
                        "single choice question has {correct} correct options, expected 1"
                    ));
                }
            }
            Question::MultipleChoice(_) | Question::HalfCorrectChoice(_) => {
                if base.answers().is_empty() {
                    warn("choice question has no options".into());
                } else if base.correct_count() == 0 {
                    warn("no option is marked correct".into());
                }
            }
            Question::OpenEnded(q) => {
                if q.correct_answer().is_empty() {
                    warn("open ended question has no correct_answer".into());
                }
            }
            Question::Chronology(q) => {
                if q.correct_order().is_empty() {
                    warn("chronology question has no correct_order".into());
                }
                for label in q.correct_order() {
                    if base.find_by_label(*label).is_none() {
                        warn(format!("correct_order references unknown label '{label}'"));
                    }
                }
                for answer in base.answers() {
                    if !q.correct_order().contains(&answer.label()) {
                        warn(format!(
                            "option '{}' is missing from correct_order",
                            answer.label()
                        ));
                    }
                }
            }
            Question::Matching(q) => {
                if q.pairs().is_empty() {
                    warn("matching question has no pairs".into());
                }
                let mut lefts = HashSet::new();
                let mut rights = HashSet::new();
                for pair in q.pairs() {
                    if !lefts.insert(pair.left_label()) {
                        warn(format!("duplicate left label '{}'", pair.left_label()));
                    }
                    if !rights.insert(pair.right_label()) {
                        warn(format!("duplicate right label '{}'", pair.right_label()));
                    }
                }
            }
        }
    }

    warnings
}
