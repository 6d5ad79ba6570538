//! Ballistics: missile spawn state and scripted travel path.
//!
//! A missile spawns just ahead of the firing ship's nose, carries the
//! ship's velocity at the instant of firing, and flies in a straight line
//! to a point a fixed range ahead. The destination is fixed at fire time;
//! turning the ship afterwards does not re-aim the missile.

use glam::DVec2;

use spacewar_core::components::FlightPlan;
use spacewar_core::enums::FlightPhase;
use spacewar_core::types::Rotation;

use crate::body::Body;
use crate::config::SimConfig;
use crate::physics::{BodyHandle, PhysicsWorld};

/// How missiles are built and how far and long they fly.
#[derive(Debug, Clone)]
pub struct FlightSettings {
    /// Validated missile body; positioned per launch.
    pub missile: Body,
    pub range: f64,
    pub duration_secs: f64,
    pub grace_secs: f64,
}

impl FlightSettings {
    pub fn from_config(config: &SimConfig, missile: Body) -> Self {
        Self {
            missile,
            range: config.missile_range,
            duration_secs: config.missile_flight_secs,
            grace_secs: config.missile_grace_secs,
        }
    }
}

/// Result of a successful launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissileLaunch {
    pub missile: BodyHandle,
    pub position: DVec2,
    pub velocity: DVec2,
    pub destination: DVec2,
}

/// Fire a missile from `ship` at simulation time `now`.
///
/// Returns `None` without touching the world if the ship is gone.
pub fn fire(
    physics: &mut PhysicsWorld,
    ship: BodyHandle,
    settings: &FlightSettings,
    now: f64,
) -> Option<MissileLaunch> {
    let ship_pos = physics.position(ship)?;
    let ship_rotation = physics.rotation(ship)?;
    let ship_velocity = physics.velocity(ship)?;
    let ship_shape = physics.shape(ship)?;

    let forward = Rotation(ship_rotation).forward();
    let padding = ship_shape.bounding_height(ship_rotation)
        - settings.missile.shape.bounding_height(ship_rotation) / 2.0;
    let position = ship_pos + forward * padding;
    let destination = ship_pos + forward * settings.range;

    let missile = physics.add_body(
        settings
            .missile
            .clone()
            .at(position)
            .rotated(ship_rotation)
            .moving(ship_velocity),
    );
    schedule(
        physics,
        missile,
        destination,
        settings.duration_secs,
        settings.grace_secs,
        now,
    );

    Some(MissileLaunch {
        missile,
        position,
        velocity: ship_velocity,
        destination,
    })
}

/// Put `missile` on a straight path from its current position to
/// `destination`, ending `duration_secs + grace_secs` after `now`.
///
/// Returns false if the missile is gone.
pub fn schedule(
    physics: &mut PhysicsWorld,
    missile: BodyHandle,
    destination: DVec2,
    duration_secs: f64,
    grace_secs: f64,
    now: f64,
) -> bool {
    let Some(origin) = physics.position(missile) else {
        return false;
    };
    let plan = FlightPlan {
        origin,
        destination,
        duration_secs,
        grace_secs,
        launched_at: now,
        phase: FlightPhase::Travel,
    };
    physics.world_mut().insert_one(missile, plan).is_ok()
}
