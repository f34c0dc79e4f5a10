//! Grade sample responses — build one question of every kind and grade it.
//!
//! This example shows how to author questions with `QuestionBuilder` and
//! grade already-parsed responses without the terminal driver.
//!
//! ```bash
//! cargo run -p quizgrade-core --example grade_sample
//! ```

use quizgrade_core::{QuestionBuilder, Response};

fn main() -> anyhow::Result<()> {
    let graded = [
        (
            QuestionBuilder::single_choice("What is the capital of France?")
                .answer('A', "Berlin", false)
                .answer('B', "Madrid", false)
                .answer('C', "Paris", true)
                .build(),
            Response::SingleChoice('C'),
        ),
        (
            QuestionBuilder::multiple_choice("Which of the following are fruits?")
                .answer('A', "Carrot", false)
                .answer('B', "Apple", true)
                .answer('C', "Tomato", false)
                .answer('D', "Banana", true)
                .build(),
            Response::MultipleChoice(vec!['B']),
        ),
        (
            QuestionBuilder::half_correct_choice("Select half of the correct options")
                .answer('A', "Option A", true)
                .answer('B', "Option B", false)
                .answer('C', "Option C", true)
                .build(),
            Response::HalfCorrectChoice(vec!['A', 'B']),
        ),
        (
            QuestionBuilder::open_ended("What is the largest planet in our solar system?")
                .correct_answer("Jupiter")
                .build(),
            Response::OpenEnded("jupiter".into()),
        ),
        (
            QuestionBuilder::chronology("Put the following events in chronological order")
                .answer('A', "Beginning", false)
                .answer('B', "Growth", false)
                .answer('C', "Culmination", false)
                .answer('D', "End", false)
                .correct_order("ABCD".chars())
                .build(),
            Response::Chronology(vec!['A', 'B', 'C', 'D']),
        ),
        (
            QuestionBuilder::matching("Match the following items")
                .pair('A', "Item A", '1', "Option 1")
                .pair('B', "Item B", '2', "Option 2")
                .pair('C', "Item C", '3', "Option 3")
                .build(),
            Response::Matching(vec![('C', '3'), ('A', '1'), ('B', '2')]),
        ),
    ];

    for (question, response) in &graded {
        print!("{question}");
        let verdict = question.grade(response)?;
        println!("Submitted: {response:?}");
        println!("Result: {verdict}\n");
    }

    Ok(())
}
