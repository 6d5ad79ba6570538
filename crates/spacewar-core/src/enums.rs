//! Enumeration and flag types used throughout the simulation.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Classification tag of a body, used for contact filtering.
///
/// Declaration order matches bit order, so the derived `Ord` agrees with
/// comparing [`Category::bit`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Ship,
    Missile,
    Star,
}

bitflags! {
    /// Set of categories. Each category owns exactly one bit.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CategoryMask: u32 {
        const SHIP = 1 << 0;
        const MISSILE = 1 << 1;
        const STAR = 1 << 2;
    }
}

impl Category {
    /// Every category, in bit order.
    pub const ALL: [Category; 3] = [Category::Ship, Category::Missile, Category::Star];

    /// The single bit this category occupies.
    pub fn bit(self) -> CategoryMask {
        match self {
            Category::Ship => CategoryMask::SHIP,
            Category::Missile => CategoryMask::MISSILE,
            Category::Star => CategoryMask::STAR,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Ship => "ship",
            Category::Missile => "missile",
            Category::Star => "star",
        }
    }
}

impl CategoryMask {
    /// Whether `category` is a member of this set.
    pub fn includes(self, category: Category) -> bool {
        self.contains(category.bit())
    }
}

impl From<Category> for CategoryMask {
    fn from(category: Category) -> Self {
        category.bit()
    }
}

/// Kind of body to build. Each kind maps to one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Ship,
    Missile,
    Star,
}

/// Stage of a missile's scripted flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Moving from spawn point to destination.
    #[default]
    Travel,
    /// Parked at the destination, waiting out the grace delay.
    Grace,
    /// Finished; removed by the cleanup system.
    Expired,
}
