//! Simulation engine: the per-frame update loop.
//!
//! `SimulationEngine` owns the physics world, the control pipeline, and the
//! input channels, and turns one rendered frame into one `tick`. Completely
//! headless, enabling deterministic testing.

use hecs::Entity;
use tracing::{debug, warn};

use spacewar_core::commands::InputAction;
use spacewar_core::error::SimError;
use spacewar_core::events::SimEvent;
use spacewar_core::state::WorldSnapshot;
use spacewar_core::types::SimTime;

use crate::ballistics::FlightSettings;
use crate::config::SimConfig;
use crate::contact;
use crate::control::ControlPipeline;
use crate::input::{InputQueue, TiltSource};
use crate::physics::{body_id, BodyHandle, PhysicsWorld};
use crate::systems;
use crate::world_setup::{self, SceneHandles};

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    physics: PhysicsWorld,
    control: ControlPipeline,
    input: InputQueue,
    tilt: Box<dyn TiltSource>,
    scene: SceneHandles,
    time: SimTime,
    /// Timestamp passed to the previous `tick`.
    last_frame: Option<f64>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Validate `config` and build the reference scene.
    pub fn new(config: SimConfig, tilt: Box<dyn TiltSource>) -> Result<Self, SimError> {
        config.validate()?;

        let mut physics = world_setup::build_physics(&config);
        let scene = world_setup::setup_scene(&mut physics)?;
        let flight = FlightSettings::from_config(&config, world_setup::make_missile()?);
        let control = ControlPipeline::new(&config, flight);

        Ok(Self {
            config,
            physics,
            control,
            input: InputQueue::new(),
            tilt,
            scene,
            time: SimTime::default(),
            last_frame: None,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Handle for producers that append input from outside the tick.
    pub fn input_queue(&self) -> InputQueue {
        self.input.clone()
    }

    /// Queue an action for the next tick.
    pub fn queue_action(&self, action: InputAction) {
        self.input.push(action);
    }

    /// Push the player ship forward. Takes effect on the next physics
    /// step without going through the input queue.
    pub fn thrust(&mut self) {
        self.control.thrust(&mut self.physics, self.scene.player);
    }

    /// Advance the simulation to `current_time` (seconds, any monotonic
    /// clock) and return the resulting snapshot.
    ///
    /// The first call only establishes the time base and integrates
    /// nothing. Gaps longer than `max_frame_dt` are clamped. A non-finite
    /// timestamp runs as a zero-length frame and leaves the time base alone.
    pub fn tick(&mut self, current_time: f64) -> WorldSnapshot {
        let dt = if current_time.is_finite() {
            let dt = self.last_frame.map_or(0.0, |last| {
                (current_time - last).clamp(0.0, self.config.max_frame_dt)
            });
            self.last_frame = Some(current_time);
            dt
        } else {
            warn!(current_time, "ignoring non-finite frame time");
            0.0
        };

        // 1. Input: queued fire actions, then tilt
        let player = self.player();
        let launches = self.control.run(
            &mut self.physics,
            &self.input,
            self.tilt.as_ref(),
            player,
            self.time.elapsed_secs,
        );
        for launch in launches {
            debug!(missile = ?launch.missile, position = ?launch.position, "missile fired");
            self.events.push(SimEvent::MissileFired {
                missile: body_id(launch.missile),
                position: launch.position,
            });
        }

        // 2. Physics
        self.physics.step(dt);
        self.time.advance(dt);

        // 3. Scripted missiles and their removal
        systems::missile_flight::run(self.physics.world_mut(), self.time.elapsed_secs);
        systems::cleanup::run(
            self.physics.world_mut(),
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 4. Contacts
        for event in self.physics.detect_contacts() {
            let resolved = contact::resolve(&event);
            contact::report(&resolved, event.began);
            if event.began {
                self.events.push(SimEvent::Contact {
                    first: resolved.first,
                    second: resolved.second,
                });
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            self.physics.world(),
            &self.time,
            Some(self.scene.player),
            Some(self.scene.enemy),
            events,
        )
    }

    /// Player ship, if it is still in the world.
    pub fn player(&self) -> Option<BodyHandle> {
        Some(self.scene.player).filter(|ship| self.physics.contains(*ship))
    }

    /// Enemy ship, if it is still in the world.
    pub fn enemy(&self) -> Option<BodyHandle> {
        Some(self.scene.enemy).filter(|ship| self.physics.contains(*ship))
    }

    pub fn star(&self) -> BodyHandle {
        self.scene.star
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    /// Mutable physics access for scripted scenarios (placing bodies,
    /// removing a ship).
    pub fn physics_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.physics
    }
}
