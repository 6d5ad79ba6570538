//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::FORWARD_OFFSET;

/// 2D position in scene space (points). x = right, y = up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// 2D linear velocity (points/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Body rotation in radians, counter-clockwise from the sprite baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation(pub f64);

/// Stable identifier of a body, as handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub u64);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks run so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Bounding shape of a body, in body-local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// Rectangle centered on the body, rotated with it.
    Rect { width: f64, height: f64 },
    /// Circle centered on the body.
    Circle { radius: f64 },
}

/// Axis-aligned bounding box in scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rotation {
    /// Unit vector pointing out of the body's nose.
    ///
    /// Sprites are drawn pointing up, so the nose sits a quarter turn
    /// counter-clockwise from the rotation angle.
    pub fn forward(&self) -> DVec2 {
        DVec2::from_angle(self.0 + FORWARD_OFFSET)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

impl Shape {
    /// Whether every extent is positive and finite.
    pub fn is_valid(&self) -> bool {
        match *self {
            Shape::Rect { width, height } => {
                width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
            }
            Shape::Circle { radius } => radius.is_finite() && radius > 0.0,
        }
    }

    /// Half extents of the shape's bounding box at the given rotation.
    pub fn half_extents(&self, rotation: f64) -> DVec2 {
        match *self {
            Shape::Rect { width, height } => {
                let (sin, cos) = rotation.sin_cos();
                let (sin, cos) = (sin.abs(), cos.abs());
                DVec2::new(
                    cos * width * 0.5 + sin * height * 0.5,
                    sin * width * 0.5 + cos * height * 0.5,
                )
            }
            Shape::Circle { radius } => DVec2::splat(radius),
        }
    }

    /// Height of the rotated bounding box.
    pub fn bounding_height(&self, rotation: f64) -> f64 {
        self.half_extents(rotation).y * 2.0
    }

    /// Bounding box of the shape placed at `center` with `rotation`.
    pub fn aabb(&self, center: DVec2, rotation: f64) -> Aabb {
        let half = self.half_extents(rotation);
        Aabb {
            min: center - half,
            max: center + half,
        }
    }
}

impl Aabb {
    /// Whether two boxes share any interior area or touch.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}
