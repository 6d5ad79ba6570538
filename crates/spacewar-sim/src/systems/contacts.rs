//! Contact detection: overlap tests between interested pairs.

use std::collections::HashSet;

use hecs::{Entity, World};

use spacewar_core::classifier::wants_contact;
use spacewar_core::components::Classification;
use spacewar_core::types::{Aabb, Position, Rotation, Shape};

use crate::contact::ContactEvent;

/// Emit one event per overlapping pair where either body's contact mask
/// names the other's category.
///
/// `touching` holds the pairs seen at the previous call and is replaced
/// with the current set; an event's `began` flag is set when its pair is
/// new.
pub fn run(world: &World, touching: &mut HashSet<(u64, u64)>) -> Vec<ContactEvent> {
    let mut bodies: Vec<(Entity, Classification, Aabb)> = world
        .query::<(&Position, &Rotation, &Shape, &Classification)>()
        .iter()
        .map(|(entity, (pos, rotation, shape, classification))| {
            (entity, *classification, shape.aabb(pos.0, rotation.0))
        })
        .collect();
    // Stable pair order regardless of archetype layout.
    bodies.sort_by_key(|(entity, _, _)| entity.to_bits());

    let mut contacts = Vec::new();
    let mut current = HashSet::with_capacity(touching.len());

    for (i, (entity_a, class_a, bounds_a)) in bodies.iter().enumerate() {
        for (entity_b, class_b, bounds_b) in &bodies[i + 1..] {
            if !wants_contact(class_a, class_b) || !bounds_a.overlaps(bounds_b) {
                continue;
            }
            let key = (entity_a.to_bits().get(), entity_b.to_bits().get());
            contacts.push(ContactEvent {
                body_a: *entity_a,
                body_b: *entity_b,
                category_a: class_a.category,
                category_b: class_b.category,
                began: !touching.contains(&key),
            });
            current.insert(key);
        }
    }

    *touching = current;
    contacts
}
