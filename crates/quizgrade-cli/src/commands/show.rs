//! The `quizgrade show` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizgrade_core::model::Quiz;
use quizgrade_core::parser;
use quizgrade_core::question::Question;

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let quiz = parser::parse_quiz(&quiz_path)?;

    println!("Quiz: {} ({} questions)", quiz.title, quiz.questions.len());
    if !quiz.description.is_empty() {
        println!("{}", quiz.description);
    }
    println!();

    for question in &quiz.questions {
        println!("{question}");
    }

    print_summary(&quiz);
    Ok(())
}

fn print_summary(quiz: &Quiz) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Type", "Prompt", "Items"]);

    for (i, question) in quiz.questions.iter().enumerate() {
        let items = match question {
            Question::Matching(q) => q.pairs().len(),
            other => other.answers().len(),
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(question.kind()),
            Cell::new(question.prompt()),
            Cell::new(items),
        ]);
    }

    println!("{table}");
}
