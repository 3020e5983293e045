//! # stroll_audio - Stroll Engine Audio
//!
//! Ambient audio for the stage system: named profiles, hierarchical channel
//! mixing, and a playback system that treats every backend failure as
//! cosmetic. Gameplay never halts because a speaker could not be opened;
//! failures are logged and swallowed.
//!
//! Actual sample output lives behind the [`AmbientSink`] trait so the engine
//! itself stays free of platform audio dependencies.

pub mod channel;
pub mod profile;
pub mod system;

pub mod prelude {
    pub use crate::channel::{AudioChannel, ChannelManager};
    pub use crate::profile::AmbientProfile;
    pub use crate::system::{AmbientSink, AudioError, AudioSystem, NullSink};
}

pub use prelude::*;
