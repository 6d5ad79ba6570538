//! Physics world: body storage, gravity field, perimeter, and stepping.
//!
//! `PhysicsWorld` is the only owner of the hecs `World`. Other modules read
//! it through accessors and mutate it through the operations below or the
//! crate-internal systems.

use std::collections::HashSet;

use glam::DVec2;
use hecs::{Entity, World};

use spacewar_core::components::{
    AppliedForce, Classification, RigidBody, RotationEase, RotationEases,
};
use spacewar_core::types::{BodyId, Position, Rotation, Shape, Velocity};

use crate::body::Body;
use crate::contact::ContactEvent;
use crate::systems;

/// Typed handle to a body in the world.
pub type BodyHandle = Entity;

/// Stable id of a body for the presentation layer.
pub fn body_id(handle: BodyHandle) -> BodyId {
    BodyId(handle.to_bits().get())
}

/// Radial gravity source with inverse-square falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    pub center: DVec2,
    pub strength: f64,
    /// Distances below this are clamped to it.
    pub min_distance: f64,
}

impl GravityField {
    /// Force exerted on a body at `position`, pointing at the center.
    ///
    /// A body exactly at the center has no defined direction and feels no
    /// force.
    pub fn force_at(&self, position: DVec2) -> DVec2 {
        let offset = self.center - position;
        let distance = offset.length();
        if distance == 0.0 {
            return DVec2::ZERO;
        }
        let clamped = distance.max(self.min_distance);
        offset / distance * (self.strength / (clamped * clamped))
    }
}

/// Rectangular wall around the scene. Bodies bounce off it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perimeter {
    pub min: DVec2,
    pub max: DVec2,
}

impl Perimeter {
    /// Perimeter from the origin to `size`.
    pub fn from_size(size: DVec2) -> Self {
        Self {
            min: DVec2::ZERO,
            max: size,
        }
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

/// Owns every body plus the fields acting on them.
pub struct PhysicsWorld {
    world: World,
    gravity: GravityField,
    perimeter: Perimeter,
    /// Pairs that overlapped at the previous contact detection.
    touching: HashSet<(u64, u64)>,
}

impl PhysicsWorld {
    pub fn new(gravity: GravityField, perimeter: Perimeter) -> Self {
        Self {
            world: World::new(),
            gravity,
            perimeter,
            touching: HashSet::new(),
        }
    }

    /// Insert a body and return its handle. Handles are never reused while
    /// the body is alive.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        self.world.spawn((
            body.classification,
            body.rigid,
            body.shape,
            Position(body.position),
            Rotation(body.rotation),
            Velocity(body.velocity),
            AppliedForce::default(),
            RotationEases::default(),
        ))
    }

    /// Remove a body. Returns false if it was already gone.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        self.world.despawn(handle).is_ok()
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.world.contains(handle)
    }

    pub fn body_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Queue a force for the next step. Immovable and missing bodies
    /// ignore it.
    pub fn apply_force(&mut self, handle: BodyHandle, force: DVec2) {
        let dynamic = self
            .world
            .get::<&RigidBody>(handle)
            .map(|rigid| rigid.dynamic)
            .unwrap_or(false);
        if !dynamic {
            return;
        }
        if let Ok(mut applied) = self.world.get::<&mut AppliedForce>(handle) {
            applied.0 += force;
        }
    }

    /// Start a rotation ease on a body. Runs alongside any eases already in
    /// progress. Returns false if the body is gone.
    pub fn start_rotation(&mut self, handle: BodyHandle, ease: RotationEase) -> bool {
        match self.world.get::<&mut RotationEases>(handle) {
            Ok(mut eases) => {
                eases.0.push(ease);
                true
            }
            Err(_) => false,
        }
    }

    /// Advance all dynamic bodies by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        systems::gravity::run(&mut self.world, &self.gravity);
        systems::movement::run(&mut self.world, dt);
        systems::movement::run_rotation(&mut self.world, dt);
        systems::boundary::run(&mut self.world, &self.perimeter);
        systems::collision::run(&mut self.world);
    }

    /// Report every interested pair whose bounds overlap right now.
    pub fn detect_contacts(&mut self) -> Vec<ContactEvent> {
        systems::contacts::run(&self.world, &mut self.touching)
    }

    pub fn gravity(&self) -> &GravityField {
        &self.gravity
    }

    pub fn perimeter(&self) -> &Perimeter {
        &self.perimeter
    }

    pub fn position(&self, handle: BodyHandle) -> Option<DVec2> {
        self.world.get::<&Position>(handle).ok().map(|p| p.0)
    }

    pub fn velocity(&self, handle: BodyHandle) -> Option<DVec2> {
        self.world.get::<&Velocity>(handle).ok().map(|v| v.0)
    }

    pub fn rotation(&self, handle: BodyHandle) -> Option<f64> {
        self.world.get::<&Rotation>(handle).ok().map(|r| r.0)
    }

    pub fn shape(&self, handle: BodyHandle) -> Option<Shape> {
        self.world.get::<&Shape>(handle).ok().map(|s| *s)
    }

    pub fn classification(&self, handle: BodyHandle) -> Option<Classification> {
        self.world.get::<&Classification>(handle).ok().map(|c| *c)
    }

    /// Overwrite a body's velocity. Returns false if the body is gone.
    pub fn set_velocity(&mut self, handle: BodyHandle, velocity: DVec2) -> bool {
        match self.world.get::<&mut Velocity>(handle) {
            Ok(mut v) => {
                v.0 = velocity;
                true
            }
            Err(_) => false,
        }
    }

    /// Overwrite a body's position. Returns false if the body is gone.
    pub fn set_position(&mut self, handle: BodyHandle, position: DVec2) -> bool {
        match self.world.get::<&mut Position>(handle) {
            Ok(mut p) => {
                p.0 = position;
                true
            }
            Err(_) => false,
        }
    }

    /// Read-only access to the underlying ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
