//! Runtime tuning for a simulation session.

use serde::{Deserialize, Serialize};

use spacewar_core::constants::*;
use spacewar_core::error::SimError;

/// Configuration for starting a new simulation.
///
/// Every field has a default, so a config file only needs to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Scene size in points; also the perimeter.
    pub scene_width: f64,
    pub scene_height: f64,
    /// Radial gravity strength (force = strength / d²).
    pub gravity_strength: f64,
    /// Distance clamp applied before the inverse-square falloff.
    pub gravity_min_distance: f64,
    /// Force applied per thrust input.
    pub thrust: f64,
    /// Distance from ship to missile destination.
    pub missile_range: f64,
    /// Missile travel time (seconds).
    pub missile_flight_secs: f64,
    /// Missile wait at destination before removal (seconds).
    pub missile_grace_secs: f64,
    /// Tilt samples with |y| at or below this are ignored.
    pub tilt_deadzone: f64,
    /// Radians per unit tilt per second of ease.
    pub tilt_rotation_scale: f64,
    /// Duration each tilt rotation is spread over (seconds).
    pub tilt_ease_secs: f64,
    /// Longest frame delta integrated in one tick (seconds).
    pub max_frame_dt: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            scene_width: SCENE_WIDTH,
            scene_height: SCENE_HEIGHT,
            gravity_strength: GRAVITY_STRENGTH,
            gravity_min_distance: GRAVITY_MIN_DISTANCE,
            thrust: SHIP_THRUST,
            missile_range: MISSILE_RANGE,
            missile_flight_secs: MISSILE_FLIGHT_SECS,
            missile_grace_secs: MISSILE_GRACE_SECS,
            tilt_deadzone: TILT_DEADZONE,
            tilt_rotation_scale: TILT_ROTATION_SCALE,
            tilt_ease_secs: TILT_EASE_SECS,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl SimConfig {
    /// Reject values that would make the simulation meaningless or NaN.
    pub fn validate(&self) -> Result<(), SimError> {
        positive("scene_width", self.scene_width)?;
        positive("scene_height", self.scene_height)?;
        non_negative("gravity_strength", self.gravity_strength)?;
        positive("gravity_min_distance", self.gravity_min_distance)?;
        non_negative("thrust", self.thrust)?;
        positive("missile_range", self.missile_range)?;
        positive("missile_flight_secs", self.missile_flight_secs)?;
        non_negative("missile_grace_secs", self.missile_grace_secs)?;
        non_negative("tilt_deadzone", self.tilt_deadzone)?;
        if !self.tilt_rotation_scale.is_finite() {
            return Err(SimError::InvalidConfig {
                field: "tilt_rotation_scale",
                value: self.tilt_rotation_scale,
            });
        }
        positive("tilt_ease_secs", self.tilt_ease_secs)?;
        positive("max_frame_dt", self.max_frame_dt)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig { field, value })
    }
}
