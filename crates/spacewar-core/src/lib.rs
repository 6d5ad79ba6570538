//! Core types and definitions for the SPACEWAR simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, categories and masks, components, input actions, events,
//! snapshots, and constants. It has no dependency on the ECS or any
//! runtime framework.

pub mod classifier;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
