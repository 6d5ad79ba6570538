//! Physical collision response between overlapping bodies.
//!
//! A body is pushed by another only when its collision mask includes the
//! other body's category. The push reflects the velocity component heading
//! into the other body. Bodies with an empty collision mask are never
//! touched here.

use glam::DVec2;
use hecs::{Entity, World};

use spacewar_core::components::{Classification, FlightPlan, RigidBody};
use spacewar_core::types::{Aabb, Position, Rotation, Shape, Velocity};

struct Collider {
    entity: Entity,
    bounds: Aabb,
    classification: Classification,
    responds: bool,
}

pub fn run(world: &mut World) {
    // Collect first, apply after (avoid borrow conflicts with hecs)
    let colliders: Vec<Collider> = world
        .query::<(
            &Position,
            &Rotation,
            &Shape,
            &Classification,
            &RigidBody,
            Option<&FlightPlan>,
        )>()
        .iter()
        .map(|(entity, (pos, rotation, shape, classification, rigid, plan))| Collider {
            entity,
            bounds: shape.aabb(pos.0, rotation.0),
            classification: *classification,
            responds: rigid.dynamic && plan.is_none(),
        })
        .collect();

    let mut pushes: Vec<(Entity, DVec2)> = Vec::new();
    for (i, a) in colliders.iter().enumerate() {
        for b in &colliders[i + 1..] {
            if !a.bounds.overlaps(&b.bounds) {
                continue;
            }
            let normal = (a.bounds.center() - b.bounds.center()).normalize_or_zero();
            if a.responds
                && a.classification
                    .collision_mask
                    .includes(b.classification.category)
            {
                pushes.push((a.entity, normal));
            }
            if b.responds
                && b.classification
                    .collision_mask
                    .includes(a.classification.category)
            {
                pushes.push((b.entity, -normal));
            }
        }
    }

    for (entity, normal) in pushes {
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            let approach = vel.0.dot(normal);
            if approach < 0.0 {
                vel.0 -= 2.0 * approach * normal;
            }
        }
    }
}
