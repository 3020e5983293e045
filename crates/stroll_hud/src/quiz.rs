//! Quiz prompts

use serde::{Deserialize, Serialize};

/// A multiple-choice question used as a stage gate
///
/// Checking an answer has no side effects, so a wrong guess can be retried
/// any number of times without penalty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizPrompt {
    /// Question text
    pub prompt: String,
    /// Answer options, in display order
    pub options: Vec<String>,
    /// Index of the correct option
    pub correct_index: usize,
}

impl QuizPrompt {
    /// Create a new quiz
    pub fn new(prompt: impl Into<String>, options: Vec<String>, correct_index: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct_index,
        }
    }

    /// Whether the chosen option is the correct one
    pub fn check(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    /// Whether the quiz is well-formed
    pub fn is_valid(&self) -> bool {
        !self.options.is_empty() && self.correct_index < self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> QuizPrompt {
        QuizPrompt::new(
            "Which way does the tide come in?",
            vec!["From the cliffs".into(), "From the sea".into()],
            1,
        )
    }

    #[test]
    fn test_check() {
        let quiz = quiz();
        assert!(!quiz.check(0));
        assert!(quiz.check(1));
        // Retrying after a wrong answer still works
        assert!(quiz.check(1));
    }

    #[test]
    fn test_validity() {
        assert!(quiz().is_valid());
        assert!(!QuizPrompt::new("?", vec![], 0).is_valid());
        assert!(!QuizPrompt::new("?", vec!["a".into()], 3).is_valid());
    }
}
