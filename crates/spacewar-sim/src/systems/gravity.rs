//! Radial gravity: pulls every free-flying dynamic body toward the field
//! center.

use hecs::World;

use spacewar_core::components::{AppliedForce, FlightPlan, RigidBody};
use spacewar_core::types::Position;

use crate::physics::GravityField;

/// Add this step's gravity to each body's accumulated force.
/// Immovable bodies and missiles on a scripted path are skipped.
pub fn run(world: &mut World, field: &GravityField) {
    for (_entity, (pos, rigid, force, plan)) in world.query_mut::<(
        &Position,
        &RigidBody,
        &mut AppliedForce,
        Option<&FlightPlan>,
    )>() {
        if !rigid.dynamic || plan.is_some() {
            continue;
        }
        force.0 += field.force_at(pos.0);
    }
}
