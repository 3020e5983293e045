//! # stroll_stage - Stroll Engine Stage Progression
//!
//! The core of the engine: the finite-state machine that moves the player
//! through themed stages. It owns the campaign configuration and the
//! "current stage" relation, decides when a stage is complete, runs the
//! completion gate (none, quiz, or timed show), and performs the atomic
//! transition - swap scene visibility, repopulate collectibles, re-arm
//! encounters, apply the environment, announce through the presenter.
//!
//! Everything runs single-threaded and frame-driven. Long-running effects
//! (the lantern show, an open quiz) are explicit state advanced by `tick`,
//! never blocking waits.

pub mod controller;
pub mod environment;
pub mod error;
pub mod gate;
pub mod session;
pub mod stage;

pub mod prelude {
    pub use crate::controller::{StageContext, StageController, StageState};
    pub use crate::environment::EnvironmentProfile;
    pub use crate::error::{CampaignError, StageError};
    pub use crate::gate::{ActiveGate, CompletionGate};
    pub use crate::session::GameSession;
    pub use crate::stage::{Campaign, DressingSpec, StageConfig};
}

pub use prelude::*;
