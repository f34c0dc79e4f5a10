//! Question kinds and their grading rules.
//!
//! Every kind shares a [`QuestionBase`] (prompt plus ordered options) and adds
//! the answer data its grading rule needs. Questions are produced by
//! [`QuestionBuilder`](crate::builder::QuestionBuilder) and are read-only
//! afterwards.

use std::fmt;

use crate::model::{Answer, Pair, QuestionKind};

/// Prompt text and ordered options shared by every question kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBase {
    pub(crate) prompt: String,
    pub(crate) answers: Vec<Answer>,
}

impl QuestionBase {
    pub(crate) fn new(prompt: String, answers: Vec<Answer>) -> Self {
        Self { prompt, answers }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in insertion order, which is also display order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// First option carrying `label`, if any. Duplicate labels resolve to the
    /// earliest one.
    pub fn find_by_label(&self, label: char) -> Option<&Answer> {
        self.answers.iter().find(|a| a.label() == label)
    }

    /// `true` only if `label` exists and its first option is flagged correct.
    pub fn is_option_correct(&self, label: char) -> bool {
        self.find_by_label(label).is_some_and(Answer::is_correct)
    }

    /// Number of options flagged correct.
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct()).count()
    }
}

impl fmt::Display for QuestionBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Question: {}", self.prompt)?;
        writeln!(f, "Answers:")?;
        for answer in &self.answers {
            writeln!(f, "- {}. {}", answer.label(), answer.text())?;
        }
        Ok(())
    }
}

/// Exactly one option is expected to be correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleChoice {
    pub(crate) base: QuestionBase,
}

impl SingleChoice {
    pub fn base(&self) -> &QuestionBase {
        &self.base
    }

    pub fn grade(&self, label: char) -> bool {
        self.base.is_option_correct(label)
    }
}

/// Any number of options may be correct; all of them must be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoice {
    pub(crate) base: QuestionBase,
}

impl MultipleChoice {
    pub fn base(&self) -> &QuestionBase {
        &self.base
    }

    /// The selection must have as many labels as there are correct options
    /// and every label must be correct. Labels are not deduplicated, so a
    /// repeated correct label counts once per occurrence.
    pub fn grade(&self, labels: &[char]) -> bool {
        labels.len() == self.base.correct_count()
            && labels.iter().all(|&l| self.base.is_option_correct(l))
    }
}

/// Passes when at least half (rounded up) of the correct options are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfCorrectChoice {
    pub(crate) base: QuestionBase,
}

impl HalfCorrectChoice {
    pub fn base(&self) -> &QuestionBase {
        &self.base
    }

    /// Minimum number of correct labels a selection must contain.
    pub fn required(&self) -> usize {
        let total = self.base.correct_count();
        total / 2 + total % 2
    }

    /// Incorrect labels do not disqualify a selection; only the number of
    /// correct ones is compared against [`required`](Self::required).
    pub fn grade(&self, labels: &[char]) -> bool {
        let required = self.required();
        if labels.len() < required {
            return false;
        }
        let selected = labels
            .iter()
            .filter(|&&l| self.base.is_option_correct(l))
            .count();
        selected >= required
    }
}

/// Free-text answer compared exactly against the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenEnded {
    pub(crate) base: QuestionBase,
    pub(crate) correct_answer: String,
}

impl OpenEnded {
    pub fn base(&self) -> &QuestionBase {
        &self.base
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Case- and whitespace-sensitive.
    pub fn grade(&self, text: &str) -> bool {
        text == self.correct_answer
    }
}

/// Items must be put in the stored order.
///
/// The options only describe the items; their correctness flags play no part
/// in grading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chronology {
    pub(crate) base: QuestionBase,
    pub(crate) correct_order: Vec<char>,
}

impl Chronology {
    pub fn base(&self) -> &QuestionBase {
        &self.base
    }

    pub fn correct_order(&self) -> &[char] {
        &self.correct_order
    }

    pub fn grade(&self, order: &[char]) -> bool {
        order == self.correct_order.as_slice()
    }
}

/// Left labels must be linked to their right labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    pub(crate) base: QuestionBase,
    pub(crate) pairs: Vec<Pair>,
}

impl Matching {
    pub fn base(&self) -> &QuestionBase {
        &self.base
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// The submission must have one entry per stored pair and each entry must
    /// appear among the stored pairs. Entries are checked independently, so a
    /// repeated correct entry can stand in for a missing one.
    pub fn grade(&self, links: &[(char, char)]) -> bool {
        links.len() == self.pairs.len()
            && links
                .iter()
                .all(|&(left, right)| self.pairs.iter().any(|p| p.matches(left, right)))
    }
}

/// A question of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    SingleChoice(SingleChoice),
    MultipleChoice(MultipleChoice),
    HalfCorrectChoice(HalfCorrectChoice),
    OpenEnded(OpenEnded),
    Chronology(Chronology),
    Matching(Matching),
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::SingleChoice(_) => QuestionKind::SingleChoice,
            Question::MultipleChoice(_) => QuestionKind::MultipleChoice,
            Question::HalfCorrectChoice(_) => QuestionKind::HalfCorrectChoice,
            Question::OpenEnded(_) => QuestionKind::OpenEnded,
            Question::Chronology(_) => QuestionKind::Chronology,
            Question::Matching(_) => QuestionKind::Matching,
        }
    }

    pub fn base(&self) -> &QuestionBase {
        match self {
            Question::SingleChoice(q) => &q.base,
            Question::MultipleChoice(q) => &q.base,
            Question::HalfCorrectChoice(q) => &q.base,
            Question::OpenEnded(q) => &q.base,
            Question::Chronology(q) => &q.base,
            Question::Matching(q) => &q.base,
        }
    }

    pub fn prompt(&self) -> &str {
        self.base().prompt()
    }

    pub fn answers(&self) -> &[Answer] {
        self.base().answers()
    }

    pub fn find_by_label(&self, label: char) -> Option<&Answer> {
        self.base().find_by_label(label)
    }

    pub fn is_option_correct(&self, label: char) -> bool {
        self.base().is_option_correct(label)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base())?;
        writeln!(f, "Type: {}", self.kind())?;
        if let Question::Matching(q) = self {
            writeln!(f, "Pairs:")?;
            for pair in &q.pairs {
                writeln!(
                    f,
                    "- {}. {} <-> {}. {}",
                    pair.left_label(),
                    pair.left_text(),
                    pair.right_label(),
                    pair.right_text()
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::QuestionBuilder;

    fn capital_of_france() -> Question {
        QuestionBuilder::single_choice("What is the capital of France?")
            .answer('A', "Berlin", false)
            .answer('B', "Madrid", false)
            .answer('C', "Paris", true)
            .build()
    }

    fn fruits() -> MultipleChoice {
        let q = QuestionBuilder::multiple_choice("Which of the following are fruits?")
            .answer('A', "Carrot", false)
            .answer('B', "Apple", true)
            .answer('C', "Tomato", false)
            .answer('D', "Banana", true)
            .build();
        match q {
            Question::MultipleChoice(q) => q,
            other => panic!("expected multiple choice, got {:?}", other.kind()),
        }
    }

    fn half_correct(correct: usize, incorrect: usize) -> HalfCorrectChoice {
        let mut builder = QuestionBuilder::half_correct_choice("Select half");
        let labels = ('A'..='Z').take(correct + incorrect);
        for (i, label) in labels.enumerate() {
            builder = builder.answer(label, format!("Option {label}"), i < correct);
        }
        match builder.build() {
            Question::HalfCorrectChoice(q) => q,
            other => panic!("expected half correct choice, got {:?}", other.kind()),
        }
    }

    fn matching() -> Matching {
        let q = QuestionBuilder::matching("Match the following items")
            .pair('A', "Item A", '1', "Option 1")
            .pair('B', "Item B", '2', "Option 2")
            .pair('C', "Item C", '3', "Option 3")
            .build();
        match q {
            Question::Matching(q) => q,
            other => panic!("expected matching, got {:?}", other.kind()),
        }
    }

    #[test]
    fn find_by_label_returns_first_duplicate() {
        let q = QuestionBuilder::single_choice("dupes")
            .answer('A', "first", false)
            .answer('A', "second", true)
            .build();
        assert_eq!(q.find_by_label('A').unwrap().text(), "first");
        assert!(!q.is_option_correct('A'));
        assert!(q.find_by_label('Z').is_none());
    }

    #[test]
    fn is_option_correct_requires_present_and_flagged() {
        let q = capital_of_france();
        assert!(q.is_option_correct('C'));
        assert!(!q.is_option_correct('A'));
        assert!(!q.is_option_correct('X'));
    }

    #[test]
    fn single_choice_grades_by_label() {
        let Question::SingleChoice(q) = capital_of_france() else {
            panic!("expected single choice");
        };
        assert!(q.grade('C'));
        assert!(!q.grade('A'));
        assert!(!q.grade('c'));
    }

    #[test]
    fn multiple_choice_requires_exact_selection() {
        let q = fruits();
        assert!(q.grade(&['B', 'D']));
        assert!(q.grade(&['D', 'B']));
        assert!(!q.grade(&['B']));
        assert!(!q.grade(&['B', 'C']));
        assert!(!q.grade(&['B', 'D', 'B']));
        assert!(!q.grade(&[]));
    }

    #[test]
    fn multiple_choice_does_not_dedup_labels() {
        let q = fruits();
        // Two correct options, and `B` twice passes both checks.
        assert!(q.grade(&['B', 'B']));

        // With three correct options, repeating `B` hides the missing `E`.
        let Question::MultipleChoice(q) = QuestionBuilder::multiple_choice("three")
            .answer('B', "b", true)
            .answer('D', "d", true)
            .answer('E', "e", true)
            .build()
        else {
            panic!("expected multiple choice");
        };
        assert!(q.grade(&['B', 'D', 'B']));
        assert!(q.grade(&['B', 'D', 'E']));
    }

    #[test]
    fn multiple_choice_without_correct_options_accepts_only_empty() {
        let Question::MultipleChoice(q) = QuestionBuilder::multiple_choice("none")
            .answer('A', "no", false)
            .build()
        else {
            panic!("expected multiple choice");
        };
        assert!(q.grade(&[]));
        assert!(!q.grade(&['A']));
    }

    #[test]
    fn half_correct_required_rounds_up() {
        assert_eq!(half_correct(0, 1).required(), 0);
        assert_eq!(half_correct(1, 1).required(), 1);
        assert_eq!(half_correct(3, 1).required(), 2);
        assert_eq!(half_correct(4, 0).required(), 2);
        assert_eq!(half_correct(5, 0).required(), 3);
    }

    #[test]
    fn half_correct_with_three_correct() {
        // A, B, C correct; D incorrect.
        let q = half_correct(3, 1);
        assert!(q.grade(&['A', 'C']));
        assert!(q.grade(&['A', 'B', 'C']));
        assert!(!q.grade(&['A']));
        assert!(!q.grade(&['A', 'D']));
        assert!(q.grade(&['D', 'A', 'C']));
    }

    #[test]
    fn half_correct_counts_repeated_labels() {
        let q = half_correct(3, 1);
        assert!(q.grade(&['A', 'A']));
    }

    #[test]
    fn half_correct_without_correct_options_accepts_anything() {
        let q = half_correct(0, 2);
        assert!(q.grade(&[]));
        assert!(q.grade(&['A', 'B']));
    }

    #[test]
    fn open_ended_is_exact() {
        let Question::OpenEnded(q) = QuestionBuilder::open_ended("Largest planet?")
            .correct_answer("Jupiter")
            .build()
        else {
            panic!("expected open ended");
        };
        assert!(q.grade("Jupiter"));
        assert!(!q.grade("jupiter"));
        assert!(!q.grade(" Jupiter"));
        assert!(!q.grade("Jupiter "));
        assert!(!q.grade(""));
    }

    #[test]
    fn chronology_compares_in_order() {
        let Question::Chronology(q) = QuestionBuilder::chronology("Order these")
            .answer('A', "Beginning", false)
            .answer('B', "Growth", false)
            .answer('C', "Culmination", true)
            .answer('D', "End", false)
            .correct_order(['A', 'B', 'C', 'D'])
            .build()
        else {
            panic!("expected chronology");
        };
        assert!(q.grade(&['A', 'B', 'C', 'D']));
        assert!(!q.grade(&['A', 'B', 'D', 'C']));
        assert!(!q.grade(&['A', 'B', 'C']));
        assert!(!q.grade(&['A', 'B', 'C', 'D', 'D']));
        // Correctness flags on the items are not consulted.
        assert!(!q.grade(&['C']));
    }

    #[test]
    fn matching_ignores_submission_order() {
        let q = matching();
        assert!(q.grade(&[('A', '1'), ('B', '2'), ('C', '3')]));
        assert!(q.grade(&[('C', '3'), ('A', '1'), ('B', '2')]));
        assert!(!q.grade(&[('A', '1'), ('B', '3'), ('C', '2')]));
    }

    #[test]
    fn matching_requires_same_length() {
        let q = matching();
        assert!(!q.grade(&[('A', '1'), ('B', '2')]));
        assert!(!q.grade(&[]));
    }

    #[test]
    fn matching_checks_containment_not_bijection() {
        let q = matching();
        assert!(q.grade(&[('A', '1'), ('A', '1'), ('B', '2')]));
    }

    #[test]
    fn display_renders_base_then_type() {
        let text = capital_of_france().to_string();
        assert_eq!(
            text,
            "Question: What is the capital of France?\n\
             Answers:\n\
             - A. Berlin\n\
             - B. Madrid\n\
             - C. Paris\n\
             Type: Single Choice\n"
        );
    }

    #[test]
    fn display_matching_lists_pairs() {
        let text = Question::Matching(matching()).to_string();
        assert!(text.starts_with("Question: Match the following items\nAnswers:\n"));
        assert!(text.contains("Type: Matching\nPairs:\n"));
        assert!(text.contains("- B. Item B <-> 2. Option 2\n"));
    }

    #[test]
    fn built_questions_can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Question>();
        assert_send_sync::<crate::grading::Response>();
        assert_send_sync::<crate::grading::Verdict>();
    }

    #[test]
    fn display_and_grading_are_repeatable() {
        let q = fruits();
        let wrapped = Question::MultipleChoice(q.clone());
        let first = wrapped.to_string();
        for _ in 0..3 {
            assert_eq!(wrapped.to_string(), first);
            assert!(q.grade(&['B', 'D']));
            assert!(!q.grade(&['A']));
        }
        assert_eq!(Question::MultipleChoice(q), wrapped);
    }
}
