//! Simulation engine for SPACEWAR.
//!
//! Owns the hecs ECS world through [`PhysicsWorld`], drains player input
//! each frame, integrates motion under the central gravity field, and
//! produces [`WorldSnapshot`](spacewar_core::state::WorldSnapshot)s for the
//! presentation layer.

pub mod ballistics;
pub mod body;
pub mod config;
pub mod contact;
pub mod control;
pub mod engine;
pub mod input;
pub mod physics;
pub mod systems;
pub mod world_setup;

pub use spacewar_core as core;
pub use engine::SimulationEngine;
pub use physics::{BodyHandle, PhysicsWorld};
