//! Control pipeline: turns player input into physics mutations.
//!
//! Once per tick the pipeline drains the input queue (each `FireMissile`
//! becomes a launch) and samples the tilt source once (a reading outside
//! the deadzone starts a rotation ease on the player ship). Thrust does not
//! pass through the queue; the input layer calls [`ControlPipeline::thrust`]
//! as soon as it sees the event.

use glam::DVec2;

use spacewar_core::commands::InputAction;
use spacewar_core::components::RotationEase;
use spacewar_core::types::Rotation;

use crate::ballistics::{self, FlightSettings, MissileLaunch};
use crate::config::SimConfig;
use crate::input::{InputQueue, TiltSample, TiltSource};
use crate::physics::{BodyHandle, PhysicsWorld};

pub struct ControlPipeline {
    flight: FlightSettings,
    thrust: f64,
    deadzone: f64,
    rotation_scale: f64,
    ease_secs: f64,
}

impl ControlPipeline {
    pub fn new(config: &SimConfig, flight: FlightSettings) -> Self {
        Self {
            flight,
            thrust: config.thrust,
            deadzone: config.tilt_deadzone,
            rotation_scale: config.tilt_rotation_scale,
            ease_secs: config.tilt_ease_secs,
        }
    }

    /// Run one tick of input processing at simulation time `now`.
    ///
    /// The queue is always left empty, even when there is no ship to act
    /// on. Returns the missiles launched this tick, in queue order.
    pub fn run(
        &self,
        physics: &mut PhysicsWorld,
        queue: &InputQueue,
        tilt: &dyn TiltSource,
        ship: Option<BodyHandle>,
        now: f64,
    ) -> Vec<MissileLaunch> {
        let mut launches = Vec::new();
        for action in queue.drain() {
            match action {
                InputAction::FireMissile => {
                    if let Some(launch) =
                        ship.and_then(|ship| ballistics::fire(physics, ship, &self.flight, now))
                    {
                        launches.push(launch);
                    }
                }
            }
        }

        if let (Some(ship), Some(ease)) = (ship, self.tilt_ease(tilt.latest())) {
            physics.start_rotation(ship, ease);
        }

        launches
    }

    /// Rotation ease for a tilt reading, or `None` inside the deadzone.
    ///
    /// The deadzone is exclusive: a reading of exactly the threshold does
    /// not rotate. Non-finite readings are dropped.
    pub fn tilt_ease(&self, sample: Option<TiltSample>) -> Option<RotationEase> {
        let sample = sample?;
        if !sample.y.is_finite() || sample.y.abs() <= self.deadzone {
            return None;
        }
        Some(RotationEase {
            remaining_angle: sample.y * self.rotation_scale * self.ease_secs,
            remaining_secs: self.ease_secs,
        })
    }

    /// Thrust force for a ship with the given rotation.
    pub fn thrust_force(&self, rotation: f64) -> DVec2 {
        Rotation(rotation).forward() * self.thrust
    }

    /// Push `ship` forward. Applied to the next physics step; no-op if the
    /// ship is gone.
    pub fn thrust(&self, physics: &mut PhysicsWorld, ship: BodyHandle) {
        if let Some(rotation) = physics.rotation(ship) {
            physics.apply_force(ship, self.thrust_force(rotation));
        }
    }
}
