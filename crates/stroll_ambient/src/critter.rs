//! Ground critters (cats and their kin)

use rand::Rng;
use stroll_math::{Circle, Rect, Vec3};

/// How a critter picks its destination
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CritterMode {
    /// Amble between random points in the roam area
    Wander,
    /// Trail the player at a fixed offset
    Follow { offset_x: f32, offset_z: f32 },
}

/// A small ground animal
#[derive(Debug, Clone)]
pub struct Critter {
    pub position: Vec3,
    pub mode: CritterMode,
    pub speed: f32,
    /// Facing, follows travel direction
    pub heading: f32,
    /// Cosmetic tail rotation
    pub tail_swing: f32,
    target: Vec3,
    retarget_timer: f32,
}

impl Critter {
    /// A wandering critter
    pub fn wanderer(position: Vec3) -> Self {
        Self {
            position,
            mode: CritterMode::Wander,
            speed: 1.2,
            heading: 0.0,
            tail_swing: 0.0,
            target: position,
            retarget_timer: 0.0,
        }
    }

    /// A critter that follows the player at an offset
    pub fn follower(position: Vec3, offset_x: f32, offset_z: f32) -> Self {
        Self {
            mode: CritterMode::Follow { offset_x, offset_z },
            speed: 2.1,
            ..Self::wanderer(position)
        }
    }

    /// Advance one frame
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        delta: f32,
        elapsed: f32,
        player_position: Vec3,
        roam: &Rect,
        obstacles: &[Circle],
        rng: &mut R,
    ) {
        match self.mode {
            CritterMode::Wander => {
                self.retarget_timer -= delta;
                let arrived = self.position.horizontal_distance(self.target) < 0.6;
                if self.retarget_timer <= 0.0 || arrived {
                    let spot = roam.sample(rng);
                    self.target = Vec3::new(spot.x, 0.0, spot.y);
                    self.retarget_timer = rng.gen_range(2.0..6.0);
                }
            }
            CritterMode::Follow { offset_x, offset_z } => {
                self.target = Vec3::new(
                    player_position.x + offset_x,
                    0.0,
                    player_position.z + offset_z,
                );
            }
        }

        let mut to_target = self.target - self.position;
        to_target.y = 0.0;
        let distance = to_target.length();
        if distance > 0.05 {
            let direction = to_target / distance;
            self.position += direction * (self.speed * delta);
            self.heading = direction.x.atan2(direction.z);
        }

        for obstacle in obstacles {
            self.position = obstacle.push_out_3d(self.position, 0.7);
        }

        let clamped = roam.clamp(self.position.horizontal());
        self.position = Vec3::new(clamped.x, 0.0, clamped.y);

        self.tail_swing = (elapsed * 6.0 + self.position.x * 0.2).sin() * 0.6;
    }
}
