//! Turning raw terminal input into response shapes.

use anyhow::{bail, Result};

use quizgrade_core::grading::Response;
use quizgrade_core::model::QuestionKind;
use quizgrade_core::question::Question;

/// Parse one line of user input into the response shape for `kind`.
///
/// Open-ended answers keep their whitespace (only the line terminator is
/// removed); every other kind ignores surrounding whitespace.
pub fn parse_response(kind: QuestionKind, line: &str) -> Result<Response> {
    let line = line.trim_end_matches(['\n', '\r']);

    let response = match kind {
        QuestionKind::SingleChoice => match line.chars().find(|c| !c.is_whitespace()) {
            Some(label) => Response::SingleChoice(label),
            None => bail!("expected an option label"),
        },
        QuestionKind::MultipleChoice => Response::MultipleChoice(first_token(line)?),
        QuestionKind::HalfCorrectChoice => Response::HalfCorrectChoice(first_token(line)?),
        QuestionKind::Chronology => Response::Chronology(first_token(line)?),
        QuestionKind::OpenEnded => Response::OpenEnded(line.to_string()),
        QuestionKind::Matching => {
            let labels: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if labels.is_empty() {
                bail!("expected label pairs such as A1 B2");
            }
            if labels.len() % 2 != 0 {
                bail!(
                    "label '{}' has no partner, enter pairs such as A1 B2",
                    labels[labels.len() - 1]
                );
            }
            Response::Matching(labels.chunks(2).map(|p| (p[0], p[1])).collect())
        }
    };

    Ok(response)
}

fn first_token(line: &str) -> Result<Vec<char>> {
    match line.split_whitespace().next() {
        Some(token) => Ok(token.chars().collect()),
        None => bail!("expected one or more option labels"),
    }
}

/// The prompt shown before reading a response.
pub fn hint(question: &Question) -> String {
    let labels: Vec<char> = question.answers().iter().map(|a| a.label()).collect();
    match question {
        Question::SingleChoice(_) => format!("Enter your answer ({}): ", list_labels(&labels)),
        Question::MultipleChoice(q) => format!(
            "Enter your answers (e.g., {}): ",
            example(q.base().correct_count(), &labels)
        ),
        Question::HalfCorrectChoice(q) => {
            format!("Enter your answers (e.g., {}): ", example(q.required(), &labels))
        }
        Question::OpenEnded(_) => "Enter your answer: ".to_string(),
        Question::Chronology(_) => format!(
            "Enter your answers in chronological order (e.g., {}): ",
            labels.iter().collect::<String>()
        ),
        Question::Matching(q) => {
            let sample: Vec<String> = q
                .pairs()
                .iter()
                .map(|p| format!("{}{}", p.left_label(), p.right_label()))
                .collect();
            format!("Enter your answers (e.g., {}): ", sample.join(" "))
        }
    }
}

/// Renders the first `count` labels as a run such as `AB`, never empty.
fn example(count: usize, labels: &[char]) -> String {
    labels.iter().take(count.max(1)).collect()
}

fn list_labels(labels: &[char]) -> String {
    match labels {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(char::to_string).collect();
            format!("{}, or {last}", head.join(", "))
        }
    }
}
