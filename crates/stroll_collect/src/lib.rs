//! # stroll_collect - Stroll Engine Collectibles
//!
//! The floating pickups that drive stage progress. A stage's collectibles
//! are spawned as one batch inside the stage's spawn region, bob on a
//! per-instance phase for visual feedback, and are removed exactly once
//! when the player walks into pickup range.

pub mod collectible;
pub mod manager;

pub mod prelude {
    pub use crate::collectible::{Collectible, CollectibleConfig};
    pub use crate::manager::CollectibleManager;
}

pub use prelude::*;
