//! Presenter collaborator interface

use crate::modal::Modal;
use crate::quiz::QuizPrompt;

/// The screen-facing side of the game
///
/// Implementations own the actual overlay/DOM/terminal rendering. Calls
/// arrive only from the stage controller, at most a handful per frame.
pub trait Presenter {
    /// Replace the HUD status line
    fn set_hud_text(&mut self, text: &str);

    /// Show a blocking modal dialog
    fn show_modal(&mut self, modal: &Modal);

    /// Show a quiz prompt
    fn show_quiz(&mut self, quiz: &QuizPrompt);

    /// Dismiss any open modal or quiz
    fn hide_modal(&mut self);
}

/// Presenter that renders nothing
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn set_hud_text(&mut self, _text: &str) {}
    fn show_modal(&mut self, _modal: &Modal) {}
    fn show_quiz(&mut self, _quiz: &QuizPrompt) {}
    fn hide_modal(&mut self) {}
}

/// Presenter that records what it was asked to show
///
/// Backs headless runs and assertions in tests.
#[derive(Debug, Default)]
pub struct MemoryPresenter {
    hud_text: String,
    open_modal: Option<Modal>,
    open_quiz: Option<QuizPrompt>,
    modal_count: u32,
    quiz_count: u32,
}

impl MemoryPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current HUD line
    pub fn hud_text(&self) -> &str {
        &self.hud_text
    }

    /// The open modal, if any
    pub fn open_modal(&self) -> Option<&Modal> {
        self.open_modal.as_ref()
    }

    /// The open quiz, if any
    pub fn open_quiz(&self) -> Option<&QuizPrompt> {
        self.open_quiz.as_ref()
    }

    /// How many modals have been shown in total
    pub fn modal_count(&self) -> u32 {
        self.modal_count
    }

    /// How many quizzes have been shown in total
    pub fn quiz_count(&self) -> u32 {
        self.quiz_count
    }
}

impl Presenter for MemoryPresenter {
    fn set_hud_text(&mut self, text: &str) {
        self.hud_text = text.to_string();
    }

    fn show_modal(&mut self, modal: &Modal) {
        self.open_modal = Some(modal.clone());
        self.open_quiz = None;
        self.modal_count += 1;
    }

    fn show_quiz(&mut self, quiz: &QuizPrompt) {
        self.open_quiz = Some(quiz.clone());
        self.open_modal = None;
        self.quiz_count += 1;
    }

    fn hide_modal(&mut self) {
        self.open_modal = None;
        self.open_quiz = None;
    }
}
