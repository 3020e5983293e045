//! # stroll_game - The Stroll Walking Game
//!
//! The shipped campaign: three themed stages built on the stage engine.
//! A blossom grove, a lantern-lit night street, and a beach at dawn, each
//! with its own collectible target, dressing, and completion gate.
//!
//! This crate is content only - every mechanism lives in the engine crates.

pub mod campaign;

pub use campaign::{ambient_profiles, campaign, new_session, scenes, GameBackend, WORLD_SIZE};
