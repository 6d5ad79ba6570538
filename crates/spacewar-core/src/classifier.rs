//! Entity classification: which category a body belongs to and which
//! categories it cares about.
//!
//! Only ships declare a contact mask. Every ship–anything overlap is still
//! seen because the contact filter accepts a pair when *either* side is
//! interested in the other.

use crate::components::Classification;
use crate::enums::{BodyKind, Category, CategoryMask};

/// Classification for a body kind.
pub fn classify(kind: BodyKind) -> Classification {
    match kind {
        BodyKind::Ship => Classification {
            category: Category::Ship,
            contact_mask: CategoryMask::SHIP | CategoryMask::MISSILE | CategoryMask::STAR,
            collision_mask: CategoryMask::empty(),
        },
        BodyKind::Missile => Classification {
            category: Category::Missile,
            contact_mask: CategoryMask::empty(),
            collision_mask: CategoryMask::empty(),
        },
        BodyKind::Star => Classification {
            category: Category::Star,
            contact_mask: CategoryMask::empty(),
            collision_mask: CategoryMask::empty(),
        },
    }
}

/// Whether two classified bodies should be tested for overlap.
pub fn wants_contact(a: &Classification, b: &Classification) -> bool {
    a.contact_mask.includes(b.category) || b.contact_mask.includes(a.category)
}
