//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Category plus the two interest masks of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    /// Categories this body wants overlap notifications for.
    pub contact_mask: CategoryMask,
    /// Categories this body is physically pushed by.
    pub collision_mask: CategoryMask,
}

/// Mass properties. Bodies with `dynamic == false` are immovable and
/// behave as if their mass were infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub mass: f64,
    pub dynamic: bool,
}

/// Force accumulated for the next physics step, cleared after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedForce(pub DVec2);

/// A rotation spread evenly over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationEase {
    /// Angle still to be applied (radians).
    pub remaining_angle: f64,
    /// Time left to apply it in (seconds).
    pub remaining_secs: f64,
}

/// Rotation eases currently running on a body. Each progresses on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationEases(pub Vec<RotationEase>);

/// Scripted path of a missile: straight line at constant rate, then a
/// short wait, then removal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    pub origin: DVec2,
    pub destination: DVec2,
    /// Travel time from origin to destination (seconds).
    pub duration_secs: f64,
    /// Wait at the destination before removal (seconds).
    pub grace_secs: f64,
    /// Simulation time at which the missile was fired.
    pub launched_at: f64,
    pub phase: FlightPhase,
}
