//! Kinematic integration system.
//!
//! Semi-implicit Euler: velocity += force / mass * dt, then
//! position += velocity * dt. Also runs rotation eases.

use glam::DVec2;
use hecs::World;

use spacewar_core::components::{AppliedForce, FlightPlan, RigidBody, RotationEases};
use spacewar_core::types::{Position, Rotation, Velocity};

/// Integrate every free-flying dynamic body and clear accumulated forces.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel, force, rigid, plan)) in world.query_mut::<(
        &mut Position,
        &mut Velocity,
        &mut AppliedForce,
        &RigidBody,
        Option<&FlightPlan>,
    )>() {
        if rigid.dynamic && plan.is_none() {
            vel.0 += force.0 / rigid.mass * dt;
            pos.0 += vel.0 * dt;
        }
        force.0 = DVec2::ZERO;
    }
}

/// Advance every running rotation ease by `dt` and drop finished ones.
pub fn run_rotation(world: &mut World, dt: f64) {
    for (_entity, (rotation, eases)) in world.query_mut::<(&mut Rotation, &mut RotationEases)>() {
        for ease in eases.0.iter_mut() {
            let step = dt.min(ease.remaining_secs);
            let portion = ease.remaining_angle * (step / ease.remaining_secs);
            rotation.0 += portion;
            ease.remaining_angle -= portion;
            ease.remaining_secs -= step;
        }
        eases.0.retain(|ease| ease.remaining_secs > 0.0);
    }
}
