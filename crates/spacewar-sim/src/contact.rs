//! Contact resolution: orders the two sides of an overlap and reports it.
//!
//! The side with the smaller category bit always comes first, so handlers
//! for (Ship, Missile) never see (Missile, Ship). Collisions currently have
//! no gameplay effect; this is where damage or destruction would hook in.

use tracing::{info, trace};

use spacewar_core::enums::Category;

use crate::physics::{body_id, BodyHandle};

/// Raw overlap between two bodies, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
    pub category_a: Category,
    pub category_b: Category,
    /// True when the pair was not overlapping at the previous detection.
    pub began: bool,
}

/// A contact with its sides in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedContact {
    pub first: Category,
    pub second: Category,
    pub first_body: BodyHandle,
    pub second_body: BodyHandle,
}

/// Order the two sides of a contact. Equal categories fall back to body
/// id so the result is still independent of detection order.
pub fn resolve(contact: &ContactEvent) -> ResolvedContact {
    let a = (contact.category_a.bit().bits(), body_id(contact.body_a));
    let b = (contact.category_b.bit().bits(), body_id(contact.body_b));
    if a <= b {
        ResolvedContact {
            first: contact.category_a,
            second: contact.category_b,
            first_body: contact.body_a,
            second_body: contact.body_b,
        }
    } else {
        ResolvedContact {
            first: contact.category_b,
            second: contact.category_a,
            first_body: contact.body_b,
            second_body: contact.body_a,
        }
    }
}

/// Log the category pair of a resolved contact.
pub fn report(resolved: &ResolvedContact, began: bool) {
    if began {
        info!(
            first = resolved.first.name(),
            second = resolved.second.name(),
            "contact"
        );
    } else {
        trace!(
            first = resolved.first.name(),
            second = resolved.second.name(),
            "contact persists"
        );
    }
}
