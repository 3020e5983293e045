//! # stroll_input - Stroll Engine Input
//!
//! Bridges platform input events into the frame loop. Key and pointer events
//! arrive whenever the platform delivers them; gameplay reads one immutable
//! [`InputSnapshot`] per tick. Pointer capture (pointer lock / window focus)
//! is tracked as an explicit state machine the stage controller polls,
//! instead of callbacks reaching into game logic.

pub mod capture;
pub mod snapshot;

pub mod prelude {
    pub use crate::capture::{CaptureState, CaptureTracker};
    pub use crate::snapshot::{GameKey, InputSnapshot, InputState};
}

pub use prelude::*;
