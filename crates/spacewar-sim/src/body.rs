//! Body descriptions, validated before they enter the world.

use glam::DVec2;

use spacewar_core::classifier::classify;
use spacewar_core::components::{Classification, RigidBody};
use spacewar_core::enums::BodyKind;
use spacewar_core::error::SimError;
use spacewar_core::types::Shape;

/// A body ready to be added to a [`PhysicsWorld`](crate::PhysicsWorld).
///
/// Construction validates mass and shape, so a `Body` value is always safe
/// to integrate.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub classification: Classification,
    pub rigid: RigidBody,
    pub shape: Shape,
    pub position: DVec2,
    pub rotation: f64,
    pub velocity: DVec2,
}

impl Body {
    /// A movable body. Fails if `mass` is not positive and finite.
    pub fn dynamic(kind: BodyKind, mass: f64, shape: Shape) -> Result<Self, SimError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass { kind, mass });
        }
        Self::build(kind, RigidBody { mass, dynamic: true }, shape)
    }

    /// An immovable body. Forces and gravity never move it.
    pub fn fixed(kind: BodyKind, shape: Shape) -> Result<Self, SimError> {
        Self::build(
            kind,
            RigidBody {
                mass: f64::INFINITY,
                dynamic: false,
            },
            shape,
        )
    }

    fn build(kind: BodyKind, rigid: RigidBody, shape: Shape) -> Result<Self, SimError> {
        if !shape.is_valid() {
            return Err(SimError::InvalidShape(shape));
        }
        Ok(Self {
            kind,
            classification: classify(kind),
            rigid,
            shape,
            position: DVec2::ZERO,
            rotation: 0.0,
            velocity: DVec2::ZERO,
        })
    }

    pub fn at(mut self, position: DVec2) -> Self {
        self.position = position;
        self
    }

    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn moving(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Replace the masks assigned by the classifier.
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }
}
