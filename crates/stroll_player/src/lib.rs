//! # stroll_player - Stroll Engine Player
//!
//! First-person walking kinematics: instantaneous horizontal velocity from
//! input, gravity with a hard ground clamp, circular obstacle push-out, and
//! the first/third-person camera rig.
//!
//! There is deliberately no general physics solver here. The movement model
//! is the arcade one: direction changes are instant, the floor is a plane,
//! and obstacles are vertical cylinders.

pub mod camera;
pub mod config;
pub mod controller;

pub mod prelude {
    pub use crate::camera::{CameraPose, CameraRig};
    pub use crate::config::MovementConfig;
    pub use crate::controller::{PlayerController, PlayerState};
}

pub use prelude::*;
