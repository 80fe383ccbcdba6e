//! Pinhole camera: view transform, look-at orientation and projection.

use nalgebra::{Point3, Vector3};

use crate::math::{normalize_or_zero, rotate_about_axis};
use crate::Transform;

/// Camera-space depth at or below which a point counts as behind the camera.
pub const NEAR_PLANE: f64 = 1.0;

/// Distance from the eye to the image plane, in pixels at zoom 1.
pub const FOCAL_LENGTH: f64 = 500.0;

/// Screen coordinate assigned to both axes of a vertex behind the camera.
pub const BEHIND_SENTINEL: f64 = -1.0;

/// Per-component threshold below which `cross(world_up, forward)` is treated as zero.
const PARALLEL_EPSILON: f64 = 1e-6;

/// Roll angles at or below this magnitude are ignored.
const ROLL_EPSILON: f64 = 1e-9;

/// A world point mapped to screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertex {
    /// Screen x in pixels, or [`BEHIND_SENTINEL`].
    pub x: f64,
    /// Screen y in pixels (growing downward), or [`BEHIND_SENTINEL`].
    pub y: f64,
    /// Camera-space depth.
    pub depth: f64,
    /// True when `depth <= NEAR_PLANE`.
    pub behind: bool,
}

/// A camera with a position, zoom factor and view transform.
///
/// The view transform is rebuilt by [`look_at`](Camera::look_at); until then
/// it is the identity, which makes the camera look down +Z from the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Point3<f64>,
    zoom: f64,
    view: Transform,
    basis: Transform,
}

impl Camera {
    /// Creates a camera at `position` with an identity view transform.
    pub fn new(position: Point3<f64>, zoom: f64) -> Self {
        Self {
            position,
            zoom,
            view: Transform::identity(),
            basis: Transform::identity(),
        }
    }

    #[inline]
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Moves the camera without touching its orientation.
    #[inline]
    pub fn set_position(&mut self, position: Point3<f64>) {
        self.position = position;
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    /// Multiplies the zoom factor by `factor`.
    #[inline]
    pub fn scale_zoom(&mut self, factor: f64) {
        self.zoom *= factor;
    }

    /// World-to-camera transform.
    #[inline]
    pub fn view(&self) -> &Transform {
        &self.view
    }

    /// Camera-to-world rotation (transpose of the view rotation).
    #[inline]
    pub fn basis(&self) -> &Transform {
        &self.basis
    }

    /// The camera's right axis in world space.
    pub fn right(&self) -> Vector3<f64> {
        self.basis.axis(0)
    }

    /// The camera's up axis in world space.
    pub fn up(&self) -> Vector3<f64> {
        self.basis.axis(1)
    }

    /// The camera's viewing direction in world space.
    pub fn forward(&self) -> Vector3<f64> {
        self.basis.axis(2)
    }

    /// Points the camera at `target`, then rolls it by `roll` radians about
    /// the viewing direction.
    ///
    /// When the viewing direction is (anti)parallel to world up, the +X axis
    /// stands in for world up so the basis stays well defined.
    pub fn look_at(&mut self, target: &Point3<f64>, roll: f64) {
        let forward = normalize_or_zero(target - self.position);

        let mut right = Vector3::y().cross(&forward);
        if right.iter().all(|c| c.abs() < PARALLEL_EPSILON) {
            right = Vector3::x().cross(&forward);
        }
        let mut right = normalize_or_zero(right);
        let mut up = normalize_or_zero(forward.cross(&right));

        if roll.abs() > ROLL_EPSILON {
            right = rotate_about_axis(right, forward, roll);
            up = rotate_about_axis(up, forward, roll);
        }

        let rotation = Transform::from_rows(right, up, forward);
        let translation = Transform::translation(-self.position.coords);

        self.view = rotation.compose(&translation);
        self.basis = rotation.transpose();
    }

    /// Maps a world point into camera space.
    #[inline]
    pub fn to_camera_space(&self, point: &Point3<f64>) -> Point3<f64> {
        self.view.transform_point(point)
    }

    /// Projects a world point onto a square canvas of side `canvas_size`.
    ///
    /// Points at or in front of the near plane (`depth <= NEAR_PLANE`) are
    /// flagged as behind and get sentinel coordinates. No clipping happens.
    pub fn project(&self, point: &Point3<f64>, canvas_size: f64) -> ProjectedVertex {
        let p = self.to_camera_space(point);

        if p.z <= NEAR_PLANE {
            return ProjectedVertex {
                x: BEHIND_SENTINEL,
                y: BEHIND_SENTINEL,
                depth: p.z,
                behind: true,
            };
        }

        let scale = self.zoom * FOCAL_LENGTH / p.z;
        let half = canvas_size / 2.0;

        ProjectedVertex {
            x: p.x * scale + half,
            y: -p.y * scale + half,
            depth: p.z,
            behind: false,
        }
    }
}
