//! # stroll_hud - Stroll Engine Presentation Interface
//!
//! Everything the player reads: the HUD status line, modal dialogs, and quiz
//! prompts. The engine talks to the actual screen through the [`Presenter`]
//! trait; the stage controller is its only caller.

pub mod hud;
pub mod modal;
pub mod presenter;
pub mod quiz;

pub mod prelude {
    pub use crate::hud::{format_time, HudModel};
    pub use crate::modal::Modal;
    pub use crate::presenter::{MemoryPresenter, NullPresenter, Presenter};
    pub use crate::quiz::QuizPrompt;
}

pub use prelude::*;
