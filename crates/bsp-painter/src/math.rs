//! Scalar and vector helpers shared by the camera and the orbit controller.
//!
//! Positions and directions are plain nalgebra `Point3<f64>` / `Vector3<f64>`;
//! this module only adds the handful of operations nalgebra leaves to the caller.

use std::f64::consts::{PI, TAU};

use nalgebra::{Rotation3, Unit, Vector3};

/// Vectors shorter than this are treated as zero-length.
pub const NORMALIZE_EPSILON: f64 = 1e-12;

/// Normalizes `v`, returning the zero vector when `v` has (near) zero length.
///
/// `Vector3::normalize` divides by the norm unconditionally and yields NaN
/// components for a zero vector; callers here would rather get a defined
/// result and let the zero vector fall through classification.
#[inline]
pub fn normalize_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(NORMALIZE_EPSILON).unwrap_or_else(Vector3::zeros)
}

/// Wraps an angle in radians into `(-π, π]`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Linear interpolation: moves `current` toward `target` by `factor`.
#[inline]
pub fn lerp(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// Interpolates between two angles along the shortest arc.
///
/// The difference is wrapped into `(-π, π]` before scaling, so going from
/// 350° to 10° passes through 0° rather than 180°. The result is wrapped too.
pub fn lerp_angle(current: f64, target: f64, factor: f64) -> f64 {
    let diff = wrap_angle(target - current);
    wrap_angle(current + diff * factor)
}

/// Rotates `v` around `axis` by `angle` radians (right-hand rule).
///
/// The axis is normalized first. A zero-length axis leaves `v` unchanged.
pub fn rotate_about_axis(v: Vector3<f64>, axis: Vector3<f64>, angle: f64) -> Vector3<f64> {
    match Unit::try_new(axis, NORMALIZE_EPSILON) {
        Some(axis) => Rotation3::from_axis_angle(&axis, angle) * v,
        None => v,
    }
}
