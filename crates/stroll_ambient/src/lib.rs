//! # stroll_ambient - Stroll Engine Ambient Animators
//!
//! Scene dressing that moves: ground critters, drifting birds and clouds,
//! falling petals, and the ascending lanterns used by the timed show.
//! All of it is cosmetic - nothing here reads or writes stage state, and
//! every update is a plain function of (delta, elapsed, rng).

pub mod bird;
pub mod cloud;
pub mod critter;
pub mod lantern;
pub mod petal;
pub mod set;

pub mod prelude {
    pub use crate::bird::{Bird, Flock};
    pub use crate::cloud::{Cloud, CloudLayer};
    pub use crate::critter::{Critter, CritterMode};
    pub use crate::lantern::{Lantern, LanternSwarm};
    pub use crate::petal::{Petal, PetalField, PetalSource};
    pub use crate::set::AmbientSet;
}

pub use prelude::*;
