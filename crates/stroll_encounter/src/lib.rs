//! # stroll_encounter - Stroll Engine Encounters
//!
//! Short scripted NPC vignettes: an actor walks up to the player, greets or
//! hands something over, performs for a moment, and wanders off for good.
//! Encounters are queued per stage by collectible threshold and run one at
//! a time through a small per-encounter state machine.
//!
//! Vignettes are pure flavor: they never touch the collected count or the
//! stage state.

pub mod actor;
pub mod scheduler;
pub mod vignette;

pub mod prelude {
    pub use crate::actor::NpcActor;
    pub use crate::scheduler::EncounterScheduler;
    pub use crate::vignette::{Encounter, EncounterPhase, EncounterScript, VignetteAction};
}

pub use prelude::*;
