//! Missile flight system: moves scripted missiles along their flight plan.
//!
//! Travel is a constant-rate interpolation from origin to destination.
//! After arrival the missile holds position for the grace delay, then is
//! marked `Expired` for the cleanup system.

use hecs::World;

use spacewar_core::components::FlightPlan;
use spacewar_core::enums::FlightPhase;
use spacewar_core::types::Position;

/// Place every scripted missile where its plan says it is at `now`.
pub fn run(world: &mut World, now: f64) {
    for (_entity, (plan, pos)) in world.query_mut::<(&mut FlightPlan, &mut Position)>() {
        let elapsed = (now - plan.launched_at).max(0.0);
        if elapsed < plan.duration_secs {
            pos.0 = plan
                .origin
                .lerp(plan.destination, elapsed / plan.duration_secs);
            plan.phase = FlightPhase::Travel;
        } else {
            pos.0 = plan.destination;
            plan.phase = if elapsed < plan.duration_secs + plan.grace_secs {
                FlightPhase::Grace
            } else {
                FlightPhase::Expired
            };
        }
    }
}

/// Seconds until the missile is removed.
pub fn remaining_lifetime(plan: &FlightPlan, now: f64) -> f64 {
    (plan.launched_at + plan.duration_secs + plan.grace_secs - now).max(0.0)
}
