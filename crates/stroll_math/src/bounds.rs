//! Horizontal regions and obstacle footprints

use crate::vector::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the ground (XZ) plane
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Create from min and max corners
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Square of the given side length, centered at the origin
    #[inline]
    pub fn centered_square(side: f32) -> Self {
        Self::from_center_half_extents(Vec2::ZERO, Vec2::splat(side * 0.5))
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Get the size (full extents)
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Check if the rect is valid (min <= max)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Check if a point lies inside (inclusive)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Shrink by a uniform margin on all sides
    #[inline]
    pub fn shrink(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            max: self.max - Vec2::splat(margin),
        }
    }

    /// Clamp a point into the rect
    #[inline]
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Sample a uniformly random point inside the rect
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            rng.gen_range(self.min.x..=self.max.x),
            rng.gen_range(self.min.y..=self.max.y),
        )
    }
}

/// Circular footprint of a static obstacle (tree trunk, lamp post, rock)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Push a point out of the circle expanded by `padding`.
    ///
    /// Exact contact resolution: the point ends up on the expanded boundary,
    /// moved along the separation vector by the overlap amount. A point at
    /// the exact center is left untouched (no defined push direction).
    pub fn push_out(&self, point: Vec2, padding: f32) -> Vec2 {
        let offset = point - self.center;
        let dist = offset.length();
        let min_dist = self.radius + padding;
        if dist > 0.0 && dist < min_dist {
            point + offset * ((min_dist - dist) / dist)
        } else {
            point
        }
    }

    /// Apply `push_out` to the horizontal components of a 3D position
    pub fn push_out_3d(&self, point: Vec3, padding: f32) -> Vec3 {
        point.with_horizontal(self.push_out(point.horizontal(), padding))
    }
}
