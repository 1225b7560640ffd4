//! Angle math: unit conversion and shortest-distance arithmetic.

use super::more::{wrap_f32, wrap_f64};

/// Converts an angle measured in degrees to radians.
pub fn deg_to_rad(angle_degrees: f64) -> f64 {
    angle_degrees / 180.0 * std::f64::consts::PI
}

/// [`deg_to_rad`] for `f32`.
pub fn deg_to_rad_f32(angle_degrees: f32) -> f32 {
    angle_degrees / 180.0 * std::f32::consts::PI
}

/// Converts an angle measured in radians to degrees.
pub fn rad_to_deg(angle_radians: f64) -> f64 {
    angle_radians / std::f64::consts::PI * 180.0
}

/// [`rad_to_deg`] for `f32`.
pub fn rad_to_deg_f32(angle_radians: f32) -> f32 {
    angle_radians / std::f32::consts::PI * 180.0
}

/// The shortest signed distance from one angle to another, both in
/// radians, accounting for going over or under the full circle.
///
/// The returned distance is in `[-PI, PI)`.
pub fn angle_difference(source_radians: f64, destination_radians: f64) -> f64 {
    wrap_f64(
        destination_radians - source_radians,
        -std::f64::consts::PI,
        std::f64::consts::PI,
    )
}

/// [`angle_difference`] for `f32`.
pub fn angle_difference_f32(source_radians: f32, destination_radians: f32) -> f32 {
    wrap_f32(
        destination_radians - source_radians,
        -std::f32::consts::PI,
        std::f32::consts::PI,
    )
}
