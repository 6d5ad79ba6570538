//! Cleanup system: removes missiles whose flight has expired.

use hecs::{Entity, World};
use tracing::debug;

use spacewar_core::components::FlightPlan;
use spacewar_core::enums::FlightPhase;
use spacewar_core::events::SimEvent;

use crate::physics::body_id;

/// Despawn expired missiles and report each one.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<SimEvent>) {
    despawn_buffer.clear();

    for (entity, plan) in world.query_mut::<&FlightPlan>() {
        if plan.phase == FlightPhase::Expired {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            debug!(missile = ?entity, "missile expired");
            events.push(SimEvent::MissileExpired {
                missile: body_id(entity),
            });
        }
    }
}
