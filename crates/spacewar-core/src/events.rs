//! Events emitted by the simulation for presentation feedback.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::types::BodyId;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A missile left the player ship.
    MissileFired { missile: BodyId, position: DVec2 },
    /// A missile finished its flight and was removed.
    MissileExpired { missile: BodyId },
    /// Two bodies started overlapping. `first` has the smaller category bit.
    Contact { first: Category, second: Category },
}
