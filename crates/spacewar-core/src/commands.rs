//! Discrete input actions queued by the input layer.
//!
//! Actions are appended by the input-capture side and drained by the
//! control pipeline at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All queueable player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputAction {
    /// Fire one missile from the player ship.
    FireMissile,
}
