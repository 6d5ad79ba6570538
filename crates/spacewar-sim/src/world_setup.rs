//! Entity spawn factories for setting up the simulation world.
//!
//! Builds the reference scene: the player ship low on the right, the enemy
//! ship high on the left facing down, and the star at the center of the
//! gravity field.

use std::f64::consts::PI;

use glam::DVec2;

use spacewar_core::constants::*;
use spacewar_core::enums::BodyKind;
use spacewar_core::error::SimError;
use spacewar_core::types::Shape;

use crate::body::Body;
use crate::config::SimConfig;
use crate::physics::{BodyHandle, GravityField, Perimeter, PhysicsWorld};

/// Handles to the bodies created at scene start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneHandles {
    pub player: BodyHandle,
    pub enemy: BodyHandle,
    pub star: BodyHandle,
}

/// Empty physics world with the configured gravity field and perimeter.
/// The field sits at the center of the scene.
pub fn build_physics(config: &SimConfig) -> PhysicsWorld {
    let perimeter = Perimeter::from_size(DVec2::new(config.scene_width, config.scene_height));
    let gravity = GravityField {
        center: perimeter.center(),
        strength: config.gravity_strength,
        min_distance: config.gravity_min_distance,
    };
    PhysicsWorld::new(gravity, perimeter)
}

/// Spawn both ships and the star.
pub fn setup_scene(physics: &mut PhysicsWorld) -> Result<SceneHandles, SimError> {
    let size = physics.perimeter().max - physics.perimeter().min;
    let origin = physics.perimeter().min;

    let player = physics.add_body(
        make_ship()?.at(origin + DVec2::new(size.x * 0.7, size.y * 0.3)),
    );
    let enemy = physics.add_body(
        make_ship()?
            .at(origin + DVec2::new(size.x * 0.3, size.y * 0.7))
            .rotated(PI),
    );
    let star = physics.add_body(make_star()?.at(physics.gravity().center));

    Ok(SceneHandles {
        player,
        enemy,
        star,
    })
}

pub fn make_ship() -> Result<Body, SimError> {
    Body::dynamic(
        BodyKind::Ship,
        SHIP_MASS,
        Shape::Rect {
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
        },
    )
}

pub fn make_missile() -> Result<Body, SimError> {
    Body::dynamic(
        BodyKind::Missile,
        MISSILE_MASS,
        Shape::Rect {
            width: MISSILE_WIDTH,
            height: MISSILE_HEIGHT,
        },
    )
}

pub fn make_star() -> Result<Body, SimError> {
    Body::fixed(
        BodyKind::Star,
        Shape::Circle {
            radius: STAR_RADIUS,
        },
    )
}
