//! Perimeter system: keeps bodies inside the scene rectangle.
//!
//! A body whose bounding box crosses a wall is moved back inside and the
//! velocity component pointing out of the wall is reflected.

use hecs::World;

use spacewar_core::components::{FlightPlan, RigidBody};
use spacewar_core::types::{Position, Rotation, Shape, Velocity};

use crate::physics::Perimeter;

pub fn run(world: &mut World, perimeter: &Perimeter) {
    for (_entity, (pos, vel, rotation, shape, rigid, plan)) in world.query_mut::<(
        &mut Position,
        &mut Velocity,
        &Rotation,
        &Shape,
        &RigidBody,
        Option<&FlightPlan>,
    )>() {
        if !rigid.dynamic || plan.is_some() {
            continue;
        }
        let half = shape.half_extents(rotation.0);
        let lo = perimeter.min + half;
        let hi = perimeter.max - half;

        if pos.0.x < lo.x {
            pos.0.x = lo.x;
            vel.0.x = vel.0.x.abs();
        } else if pos.0.x > hi.x {
            pos.0.x = hi.x;
            vel.0.x = -vel.0.x.abs();
        }

        if pos.0.y < lo.y {
            pos.0.y = lo.y;
            vel.0.y = vel.0.y.abs();
        } else if pos.0.y > hi.y {
            pos.0.y = hi.y;
            vel.0.y = -vel.0.y.abs();
        }
    }
}
