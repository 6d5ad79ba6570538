//! Snapshot system: queries the ECS world and builds a complete WorldSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::{Entity, World};

use spacewar_core::components::{Classification, FlightPlan};
use spacewar_core::events::SimEvent;
use spacewar_core::state::{BodyView, WorldSnapshot};
use spacewar_core::types::{Position, Rotation, SimTime, Velocity};

use crate::physics::body_id;
use crate::systems::missile_flight::remaining_lifetime;

/// Build a complete WorldSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    player: Option<Entity>,
    enemy: Option<Entity>,
    events: Vec<SimEvent>,
) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        player: player.filter(|e| world.contains(*e)).map(body_id),
        enemy: enemy.filter(|e| world.contains(*e)).map(body_id),
        bodies: build_bodies(world, time.elapsed_secs),
        events,
    }
}

/// One view per body, ordered by id.
fn build_bodies(world: &World, now: f64) -> Vec<BodyView> {
    let mut bodies: Vec<BodyView> = world
        .query::<(
            &Classification,
            &Position,
            &Rotation,
            &Velocity,
            Option<&FlightPlan>,
        )>()
        .iter()
        .map(|(entity, (classification, pos, rotation, vel, plan))| BodyView {
            id: body_id(entity),
            category: classification.category,
            position: *pos,
            rotation: *rotation,
            velocity: *vel,
            lifetime_secs: plan.map(|plan| remaining_lifetime(plan, now)),
        })
        .collect();
    bodies.sort_by_key(|body| body.id);
    bodies
}
