//! The `quizgrade run` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use quizgrade_core::grading::Verdict;
use quizgrade_core::model::{QuestionKind, Quiz};
use quizgrade_core::parser;

use crate::config::{load_config_from, OutputFormat};
use crate::input::{hint, parse_response};

/// What happened to one question during a run.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// 1-based question number.
    pub index: usize,
    pub kind: QuestionKind,
    pub prompt: String,
    /// `None` when the question was skipped after repeated malformed input.
    pub verdict: Option<Verdict>,
}

/// Options controlling an interactive session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub show_hints: bool,
    pub max_attempts: u32,
    /// Print `Result: ...` after each question.
    pub echo_verdicts: bool,
}

pub fn execute(
    quiz_path: PathBuf,
    format: Option<OutputFormat>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format.unwrap_or(config.format);
    let quiz = parser::parse_quiz(&quiz_path)?;

    tracing::info!(
        quiz = %quiz.id,
        questions = quiz.questions.len(),
        "starting quiz"
    );

    let options = SessionOptions {
        show_hints: config.show_hints,
        max_attempts: config.max_attempts.max(1),
        echo_verdicts: format == OutputFormat::Text,
    };

    let stdin = io::stdin();
    let outcomes = match format {
        OutputFormat::Text => run_session(&quiz, stdin.lock(), io::stdout().lock(), &options)?,
        OutputFormat::Json => {
            // Prompts go to stderr so stdout carries only the JSON document.
            let outcomes = run_session(&quiz, stdin.lock(), io::stderr().lock(), &options)?;
            let json =
                serde_json::to_string_pretty(&outcomes).context("failed to serialize outcomes")?;
            println!("{json}");
            outcomes
        }
    };

    tracing::info!(answered = outcomes.len(), "quiz finished");
    Ok(())
}

/// Present each question, read and grade one response per question.
///
/// Stops early when `input` reaches end of file; the returned outcomes cover
/// the questions presented so far.
pub fn run_session<R: BufRead, W: Write>(
    quiz: &Quiz,
    mut input: R,
    mut out: W,
    options: &SessionOptions,
) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(quiz.questions.len());

    'questions: for (i, question) in quiz.questions.iter().enumerate() {
        write!(out, "{question}")?;

        let mut verdict = None;
        for attempt in 1..=options.max_attempts {
            if options.show_hints {
                write!(out, "{}", hint(question))?;
            }
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                tracing::debug!("input closed at question {}", i + 1);
                break 'questions;
            }

            match parse_response(question.kind(), &line) {
                Ok(response) => {
                    verdict = Some(question.grade(&response)?);
                    break;
                }
                Err(e) => {
                    writeln!(out, "Invalid input: {e}")?;
                    tracing::debug!(attempt, "rejected input for question {}", i + 1);
                }
            }
        }

        match verdict {
            Some(v) if options.echo_verdicts => writeln!(out, "Result: {v}")?,
            Some(_) => {}
            None => writeln!(out, "Skipping question after {} attempts", options.max_attempts)?,
        }
        writeln!(out)?;

        outcomes.push(Outcome {
            index: i + 1,
            kind: question.kind(),
            prompt: question.prompt().to_string(),
            verdict,
        });
    }

    Ok(outcomes)
}
