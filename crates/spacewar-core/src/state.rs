//! World snapshot: the complete visible state handed to the presentation
//! layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::events::SimEvent;
use crate::types::{BodyId, Position, Rotation, SimTime, Velocity};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub player: Option<BodyId>,
    pub enemy: Option<BodyId>,
    pub bodies: Vec<BodyView>,
    pub events: Vec<SimEvent>,
}

/// One body as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyView {
    pub id: BodyId,
    pub category: Category,
    pub position: Position,
    pub rotation: Rotation,
    pub velocity: Velocity,
    /// Seconds until removal, for bodies with a bounded lifetime.
    pub lifetime_secs: Option<f64>,
}
