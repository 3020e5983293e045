//! Camera rig

use crate::controller::PlayerState;
use serde::{Deserialize, Serialize};
use stroll_math::Vec3;

/// The camera transform for one frame
///
/// First person carries yaw/pitch directly (applied yaw-then-pitch, so the
/// horizon never rolls); third person carries a look-at target instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub look_at: Option<Vec3>,
}

/// Derives the camera pose from the player state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraRig {
    /// Eye height above the player center in first person
    pub eye_offset: f32,
    /// Chase offset before yaw rotation in third person
    pub follow_offset: Vec3,
    /// Height above the player the third-person camera looks at
    pub focus_height: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye_offset: 0.6,
            follow_offset: Vec3::new(0.0, 3.2, 7.5),
            focus_height: 1.0,
        }
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute this frame's camera pose.
    ///
    /// Placement is direct, no smoothing: a view-mode switch lands exactly
    /// on the other mode's pose for the same player state.
    pub fn pose(&self, player: &PlayerState) -> CameraPose {
        if player.third_person {
            let (sin, cos) = player.yaw.sin_cos();
            // follow_offset rotated about the vertical axis by yaw
            let offset = Vec3::new(
                self.follow_offset.x * cos + self.follow_offset.z * sin,
                self.follow_offset.y,
                self.follow_offset.z * cos - self.follow_offset.x * sin,
            );
            CameraPose {
                position: player.position + offset,
                yaw: player.yaw,
                pitch: 0.0,
                look_at: Some(player.position + Vec3::new(0.0, self.focus_height, 0.0)),
            }
        } else {
            CameraPose {
                position: player.position + Vec3::new(0.0, self.eye_offset, 0.0),
                yaw: player.yaw,
                pitch: player.pitch,
                look_at: None,
            }
        }
    }
}
