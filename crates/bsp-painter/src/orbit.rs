//! Smoothed spherical orbit controller.
//!
//! The controller keeps the camera on a sphere around a pivot point. Control
//! events only move *targets*; each [`tick`](OrbitController::tick) eases the
//! current values toward them and rebuilds the camera from the result.
//!
//! Spherical coordinates are singular at the poles. Instead of clamping the
//! polar angle, the controller flips over the pole: azimuth and roll turn by
//! half a revolution and the polar angle is reflected back into range, which
//! keeps the camera moving the same way on screen. A `flipped` flag records
//! the flip so tilt input keeps its on-screen direction.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Point3, Vector3};
use tracing::{debug, trace};

use crate::control::{ControlAction, ControlEffect};
use crate::math::{lerp, lerp_angle, wrap_angle};
use crate::{Camera, OrbitSettings};

/// A value that eases from `current` toward `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed {
    /// The value used for rendering.
    pub current: f64,
    /// The value control input is steering toward.
    pub target: f64,
}

impl Smoothed {
    /// A value at rest (`current == target`).
    pub fn settled(value: f64) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Returns true when no smoothing is in flight.
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    fn step_linear(&mut self, factor: f64) {
        self.current = lerp(self.current, self.target, factor);
    }

    fn step_angular(&mut self, factor: f64) {
        self.current = lerp_angle(self.current, self.target, factor);
    }

    /// Adds `delta` to both values, wrapping them into `(-π, π]`.
    fn rotate(&mut self, delta: f64) {
        self.current = wrap_angle(self.current + delta);
        self.target = wrap_angle(self.target + delta);
    }
}

/// A point on a sphere: distance plus two angles, in radians.
///
/// Azimuth is measured around +Y starting at +Z (toward +X), polar is the
/// elevation above the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    pub azimuth: f64,
    pub polar: f64,
}

impl Spherical {
    /// Converts an offset from the pivot into spherical coordinates.
    ///
    /// A zero offset yields radius 1 so the camera never collapses onto the pivot.
    pub fn from_offset(offset: &Vector3<f64>) -> Self {
        let radius = offset.norm();
        let horizontal = offset.x.hypot(offset.z);
        Self {
            radius: if radius > 0.0 { radius } else { 1.0 },
            azimuth: offset.x.atan2(offset.z),
            polar: offset.y.atan2(horizontal),
        }
    }

    /// Converts back into an offset from the pivot.
    pub fn to_offset(&self) -> Vector3<f64> {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        Vector3::new(
            self.radius * sin_az * cos_polar,
            self.radius * sin_polar,
            self.radius * cos_az * cos_polar,
        )
    }
}

/// Owns the camera and drives it around a pivot point.
#[derive(Debug, Clone)]
pub struct OrbitController {
    camera: Camera,
    pivot: Point3<f64>,
    radius: Smoothed,
    azimuth: Smoothed,
    polar: Smoothed,
    roll: Smoothed,
    flipped: bool,
    settings: OrbitSettings,
}

impl OrbitController {
    /// Takes over `camera`, orbiting around `pivot`.
    ///
    /// The spherical state is derived from the camera's current position and
    /// the camera is immediately re-oriented toward the pivot.
    pub fn new(camera: Camera, pivot: Point3<f64>, settings: OrbitSettings) -> Self {
        let mut controller = Self {
            camera,
            pivot,
            radius: Smoothed::settled(1.0),
            azimuth: Smoothed::settled(0.0),
            polar: Smoothed::settled(0.0),
            roll: Smoothed::settled(0.0),
            flipped: false,
            settings,
        };
        controller.derive_spherical();
        controller.update_camera();
        controller
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn pivot(&self) -> Point3<f64> {
        self.pivot
    }

    /// True while the orbit is past an odd number of pole crossings.
    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[inline]
    pub fn radius(&self) -> Smoothed {
        self.radius
    }

    #[inline]
    pub fn azimuth(&self) -> Smoothed {
        self.azimuth
    }

    #[inline]
    pub fn polar(&self) -> Smoothed {
        self.polar
    }

    #[inline]
    pub fn roll(&self) -> Smoothed {
        self.roll
    }

    #[inline]
    pub fn settings(&self) -> &OrbitSettings {
        &self.settings
    }

    /// The current (smoothed) spherical position.
    pub fn spherical(&self) -> Spherical {
        Spherical {
            radius: self.radius.current,
            azimuth: self.azimuth.current,
            polar: self.polar.current,
        }
    }

    /// Sets the radius the orbit eases toward.
    pub fn set_target_radius(&mut self, radius: f64) {
        self.radius.target = radius;
    }

    /// Sets the azimuth and polar angle the orbit eases toward.
    ///
    /// A polar target beyond ±π/2 triggers a pole flip on the next tick.
    pub fn set_target_angles(&mut self, azimuth: f64, polar: f64) {
        self.azimuth.target = azimuth;
        self.polar.target = polar;
    }

    /// Sets the roll the orbit eases toward.
    pub fn set_target_roll(&mut self, roll: f64) {
        self.roll.target = wrap_angle(roll);
    }

    /// Advances the orbit by one frame.
    pub fn tick(&mut self) {
        self.resolve_pole_crossing();

        let angle = self.settings.angle_smoothing;
        self.radius.step_linear(self.settings.radius_smoothing);
        self.azimuth.step_angular(angle);
        self.polar.step_angular(angle);
        self.roll.step_angular(angle);

        self.update_camera();

        trace!(
            radius = self.radius.current,
            azimuth = self.azimuth.current,
            polar = self.polar.current,
            roll = self.roll.current,
            "orbit tick"
        );
    }

    /// Applies one control event. Only targets, zoom and the pivot change;
    /// the camera catches up on the next tick.
    pub fn apply(&mut self, action: ControlAction) {
        let settings = self.settings;
        match action.effect() {
            ControlEffect::Orbit(sign) => {
                self.azimuth.target += sign * settings.orbit_step;
            }
            ControlEffect::Tilt(sign) => {
                let sign = if self.flipped { -sign } else { sign };
                self.polar.target += sign * settings.tilt_step;
            }
            ControlEffect::Roll(sign) => {
                self.roll.target = wrap_angle(self.roll.target + sign * settings.roll_step);
            }
            ControlEffect::ZoomIn => self.camera.scale_zoom(settings.zoom_in_factor),
            ControlEffect::ZoomOut => self.camera.scale_zoom(settings.zoom_out_factor),
            ControlEffect::Pan { right, up } => {
                self.pan(right * settings.pan_step, up * settings.pan_step);
            }
        }
    }

    /// Moves pivot and camera together along the camera's right and up axes,
    /// then re-derives the spherical state from the new positions.
    ///
    /// Any smoothing in flight is discarded.
    pub fn pan(&mut self, right: f64, up: f64) {
        let offset = self.camera.right() * right + self.camera.up() * up;
        self.pivot += offset;
        self.camera.set_position(self.camera.position() + offset);
        self.derive_spherical();
        debug!(pivot = ?self.pivot, "orbit pivot panned");
    }

    /// Flips over the pole when the target polar angle has left `[-π/2, π/2]`.
    ///
    /// Returns true if a flip happened.
    fn resolve_pole_crossing(&mut self) -> bool {
        let pole = if self.polar.target > FRAC_PI_2 {
            PI
        } else if self.polar.target < -FRAC_PI_2 {
            -PI
        } else {
            return false;
        };

        self.roll.rotate(PI);
        self.azimuth.rotate(PI);

        self.polar.current = pole - self.polar.current;
        self.polar.target = pole - self.polar.target;
        self.flipped = !self.flipped;

        // No smoothing across the pole
        self.polar.current = self.polar.target;

        debug!(
            flipped = self.flipped,
            polar = self.polar.target,
            azimuth = self.azimuth.target,
            "orbit crossed a pole"
        );
        true
    }

    /// Resets radius, azimuth and polar (current and target) from the
    /// camera's position relative to the pivot.
    fn derive_spherical(&mut self) {
        let spherical = Spherical::from_offset(&(self.camera.position() - self.pivot));
        self.radius = Smoothed::settled(spherical.radius);
        self.azimuth = Smoothed::settled(spherical.azimuth);
        self.polar = Smoothed::settled(spherical.polar);
    }

    /// Places the camera from the current spherical state and aims it at the pivot.
    fn update_camera(&mut self) {
        let position = self.pivot + self.spherical().to_offset();
        self.camera.set_position(position);
        self.camera.look_at(&self.pivot, self.roll.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_controller() -> OrbitController {
        let camera = Camera::new(Point3::new(0.0, 300.0, -1200.0), 1.0);
        OrbitController::new(camera, Point3::new(0.0, 75.0, 0.0), OrbitSettings::default())
    }

    fn settle(controller: &mut OrbitController) {
        for _ in 0..400 {
            controller.tick();
        }
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn spherical_round_trip() {
        let pivot = Point3::new(10.0, -4.0, 2.5);
        for position in [
            Point3::new(0.0, 300.0, -1200.0),
            Point3::new(-50.0, -20.0, 80.0),
            Point3::new(10.0, 100.0, 2.6),
            Point3::new(400.0, -4.0, 2.5),
        ] {
            let spherical = Spherical::from_offset(&(position - pivot));
            let back = pivot + spherical.to_offset();
            assert!(
                (back - position).norm() < 1e-9,
                "{position:?} came back as {back:?}"
            );
        }
    }

    #[test]
    fn zero_offset_gets_unit_radius() {
        let spherical = Spherical::from_offset(&Vector3::zeros());
        assert_eq!(spherical.radius, 1.0);
    }

    #[test]
    fn new_controller_keeps_camera_position() {
        let controller = make_controller();
        let position = controller.camera().position();
        assert!((position - Point3::new(0.0, 300.0, -1200.0)).norm() < 1e-9);
        assert!(controller.radius().is_settled());
        assert!(!controller.is_flipped());

        // Camera looks at the pivot
        let pivot = controller.camera().to_camera_space(&controller.pivot());
        assert_close(pivot.x, 0.0, 1e-9);
        assert_close(pivot.y, 0.0, 1e-9);
        assert_close(pivot.z, controller.radius().current, 1e-9);
    }

    #[test]
    fn tick_smooths_half_the_angular_distance() {
        let mut controller = make_controller();
        let start = controller.azimuth().current;

        controller.apply(ControlAction::OrbitRight);
        assert_close(controller.azimuth().target, start + 0.04, 1e-12);
        assert_close(controller.azimuth().current, start, 1e-12);

        controller.tick();
        assert_close(controller.azimuth().current, wrap_angle(start + 0.02), 1e-12);
    }

    #[test]
    fn radius_uses_its_own_smoothing_factor() {
        let mut controller = make_controller();
        let start = controller.radius().current;
        controller.set_target_radius(start + 100.0);

        controller.tick();
        assert_close(controller.radius().current, start + 4.0, 1e-9);

        let distance = (controller.camera().position() - controller.pivot()).norm();
        assert_close(distance, start + 4.0, 1e-9);
    }

    #[test]
    fn crossing_the_upper_pole_flips() {
        let mut controller = make_controller();
        let azimuth = controller.azimuth().target;

        controller.set_target_angles(azimuth, 80f64.to_radians());
        settle(&mut controller);
        assert!(!controller.is_flipped());

        controller.set_target_angles(azimuth, 100f64.to_radians());
        controller.tick();

        assert!(controller.is_flipped());
        assert_close(
            wrap_angle(controller.azimuth().target - azimuth - PI),
            0.0,
            1e-12,
        );
        assert_close(controller.polar().target, 80f64.to_radians(), 1e-12);
        assert_close(controller.polar().current, 80f64.to_radians(), 1e-12);
        assert_close(controller.roll().target.abs(), PI, 1e-12);
    }

    #[test]
    fn crossing_the_lower_pole_flips() {
        let mut controller = make_controller();
        let azimuth = controller.azimuth().target;

        controller.set_target_angles(azimuth, (-95f64).to_radians());
        controller.tick();

        assert!(controller.is_flipped());
        assert_close(controller.polar().target, (-85f64).to_radians(), 1e-12);
        assert_close(
            wrap_angle(controller.azimuth().target - azimuth - PI),
            0.0,
            1e-12,
        );
    }

    #[test]
    fn flip_continues_motion_over_the_pole() {
        let mut controller = make_controller();
        let azimuth = controller.azimuth().target;
        let radius = controller.radius().current;

        controller.set_target_angles(azimuth, 89f64.to_radians());
        settle(&mut controller);

        controller.set_target_angles(azimuth, 91f64.to_radians());
        controller.tick();

        // Same place the unflipped parameterization would put a 91 degree target
        let expected = controller.pivot()
            + Spherical {
                radius,
                azimuth,
                polar: 91f64.to_radians(),
            }
            .to_offset();
        let actual = controller.camera().position();
        assert!(
            (actual - expected).norm() < 1e-6,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn tilt_direction_inverts_when_flipped() {
        let mut controller = make_controller();

        let before = controller.polar().target;
        controller.apply(ControlAction::TiltDown);
        assert_close(controller.polar().target, before + 0.04, 1e-12);

        let azimuth = controller.azimuth().target;
        controller.set_target_angles(azimuth, 100f64.to_radians());
        controller.tick();
        assert!(controller.is_flipped());

        let before = controller.polar().target;
        controller.apply(ControlAction::TiltDown);
        assert_close(controller.polar().target, before - 0.04, 1e-12);
        controller.apply(ControlAction::TiltUp);
        assert_close(controller.polar().target, before, 1e-12);
    }

    #[test]
    fn double_flip_restores_flag() {
        let mut controller = make_controller();
        let azimuth = controller.azimuth().target;

        controller.set_target_angles(azimuth, 100f64.to_radians());
        controller.tick();
        let azimuth = controller.azimuth().target;
        controller.set_target_angles(azimuth, (-100f64).to_radians());
        controller.tick();

        assert!(!controller.is_flipped());
    }

    #[test]
    fn roll_events_wrap() {
        let mut controller = make_controller();
        controller.set_target_roll(PI - 0.01);
        controller.apply(ControlAction::RollRight);
        assert_close(controller.roll().target, -PI + 0.03, 1e-12);

        controller.apply(ControlAction::RollLeft);
        assert_close(controller.roll().target, PI - 0.01, 1e-12);
    }

    #[test]
    fn zoom_events_scale_camera_zoom() {
        let mut controller = make_controller();
        controller.apply(ControlAction::ZoomIn);
        assert_close(controller.camera().zoom(), 0.9, 1e-12);
        controller.apply(ControlAction::ZoomOut);
        assert_close(controller.camera().zoom(), 0.99, 1e-12);
    }

    #[test]
    fn pan_moves_pivot_and_camera_together() {
        let mut controller = make_controller();
        let pivot = controller.pivot();
        let position = controller.camera().position();
        let right = controller.camera().right();
        let spherical = controller.spherical();

        controller.apply(ControlAction::PanRight);

        let moved = controller.pivot() - pivot;
        assert!((moved - right * 20.0).norm() < 1e-9);
        assert!((controller.camera().position() - (position + moved)).norm() < 1e-9);

        // Pure translation keeps the spherical state
        assert_close(controller.radius().current, spherical.radius, 1e-9);
        assert_close(
            wrap_angle(controller.azimuth().current - spherical.azimuth),
            0.0,
            1e-9,
        );
        assert_close(controller.polar().current, spherical.polar, 1e-9);
    }

    #[test]
    fn pan_collapses_in_flight_smoothing() {
        let mut controller = make_controller();
        controller.apply(ControlAction::OrbitLeft);
        controller.apply(ControlAction::TiltUp);
        controller.set_target_radius(10.0);
        controller.tick();

        controller.apply(ControlAction::PanUp);

        assert!(controller.radius().is_settled());
        assert!(controller.azimuth().is_settled());
        assert!(controller.polar().is_settled());

        // Nothing left to ease toward, so the next tick does not move the camera
        let position = controller.camera().position();
        controller.tick();
        assert!((controller.camera().position() - position).norm() < 1e-9);
    }

    #[test]
    fn camera_always_faces_pivot() {
        let mut controller = make_controller();
        let actions = [
            ControlAction::OrbitLeft,
            ControlAction::TiltDown,
            ControlAction::RollRight,
            ControlAction::PanLeft,
            ControlAction::TiltDown,
        ];
        for (i, action) in actions.iter().cycle().take(200).enumerate() {
            controller.apply(*action);
            controller.tick();

            let pivot = controller.camera().to_camera_space(&controller.pivot());
            assert!(pivot.x.abs() < 1e-6 && pivot.y.abs() < 1e-6, "step {i}: {pivot:?}");
            assert!(pivot.z > 0.0, "step {i}: pivot behind camera");
        }
    }
}
