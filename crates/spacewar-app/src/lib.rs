//! SPACEWAR headless driver.
//!
//! Runs the simulation engine on its own thread at a fixed rate and feeds
//! it touch and tilt input the way a device front end would.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod session;
pub mod state;
pub mod touch;

pub use spacewar_core as core;
