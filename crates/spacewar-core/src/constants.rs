//! Simulation constants and tuning parameters.

use std::f64::consts::FRAC_PI_2;

/// Nominal frame rate of the update loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Largest frame delta the engine will integrate in one tick (seconds).
/// Longer gaps (debugger pauses, app suspension) are clamped to this.
pub const MAX_FRAME_DT: f64 = 0.25;

// --- Scene ---

/// Scene width in points. The perimeter runs from x = 0 to this value.
pub const SCENE_WIDTH: f64 = 1024.0;

/// Scene height in points. The perimeter runs from y = 0 to this value.
pub const SCENE_HEIGHT: f64 = 768.0;

// --- Gravity ---

/// Radial gravity strength: force magnitude is `GRAVITY_STRENGTH / d²`.
/// Roughly 10 units/s² on a unit mass at 390 units from the star.
pub const GRAVITY_STRENGTH: f64 = 1.5e6;

/// Distances below this are clamped before the inverse-square falloff.
pub const GRAVITY_MIN_DISTANCE: f64 = 10.0;

// --- Ships ---

/// Ship mass.
pub const SHIP_MASS: f64 = 1.0;

/// Ship bounding box width (sprite scaled to 10%).
pub const SHIP_WIDTH: f64 = 39.4;

/// Ship bounding box height (sprite scaled to 10%).
pub const SHIP_HEIGHT: f64 = 34.7;

/// Forward thrust applied per thrust input.
pub const SHIP_THRUST: f64 = 500.0;

// --- Missiles ---

/// Missile mass.
pub const MISSILE_MASS: f64 = 0.1;

/// Missile bounding box width.
pub const MISSILE_WIDTH: f64 = 4.0;

/// Missile bounding box height.
pub const MISSILE_HEIGHT: f64 = 8.0;

/// Distance from the firing ship to the missile's destination.
pub const MISSILE_RANGE: f64 = 500.0;

/// Time to travel from spawn point to destination (seconds).
pub const MISSILE_FLIGHT_SECS: f64 = 1.0;

/// Time a missile lingers at its destination before removal (3 frames).
pub const MISSILE_GRACE_SECS: f64 = 3.0 / 60.0;

// --- Star ---

/// Radius of the star's bounding circle.
pub const STAR_RADIUS: f64 = 1.0;

// --- Tilt control ---

/// Tilt samples with |y| at or below this are ignored.
pub const TILT_DEADZONE: f64 = 0.1;

/// Radians of rotation per unit of tilt per second of ease.
pub const TILT_ROTATION_SCALE: f64 = -FRAC_PI_2;

/// Duration over which each tilt-driven rotation is spread (seconds).
pub const TILT_EASE_SECS: f64 = 0.1;

/// Angle between a sprite's stored baseline and its nose.
pub const FORWARD_OFFSET: f64 = FRAC_PI_2;
