//! # stroll_core - Stroll Engine Core
//!
//! Zero-dependency primitives shared by every other crate in the engine:
//! instance identifiers for short-lived game objects (collectibles, vignette
//! actors, scene handles) and the frame clock that drives the cooperative
//! tick loop.

pub mod id;
pub mod time;

pub mod prelude {
    pub use crate::id::{Id, IdGenerator};
    pub use crate::time::FrameClock;
}

pub use prelude::*;
