//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod boundary;
pub mod cleanup;
pub mod collision;
pub mod contacts;
pub mod gravity;
pub mod missile_flight;
pub mod movement;
pub mod snapshot;
