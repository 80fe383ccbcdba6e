//! Tunable constants for the orbit controller and the viewer.

use nalgebra::Point3;

use crate::Color;

/// Step sizes and smoothing factors used by [`OrbitController`](crate::OrbitController).
///
/// Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    /// Azimuth change per orbit-left / orbit-right event.
    pub orbit_step: f64,
    /// Polar change per tilt-up / tilt-down event.
    pub tilt_step: f64,
    /// Roll change per roll-left / roll-right event.
    pub roll_step: f64,
    /// World-space distance moved per pan event.
    pub pan_step: f64,
    /// Fraction of the remaining angular distance covered each tick.
    pub angle_smoothing: f64,
    /// Fraction of the remaining radius distance covered each tick.
    pub radius_smoothing: f64,
    /// Zoom multiplier for zoom-in.
    pub zoom_in_factor: f64,
    /// Zoom multiplier for zoom-out.
    pub zoom_out_factor: f64,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            orbit_step: 0.04,
            tilt_step: 0.04,
            roll_step: 0.04,
            pan_step: 20.0,
            angle_smoothing: 0.5,
            radius_smoothing: 0.04,
            zoom_in_factor: 0.9,
            zoom_out_factor: 1.1,
        }
    }
}

impl OrbitSettings {
    /// Sets the orbit, tilt and roll step sizes.
    pub fn with_angle_steps(mut self, orbit: f64, tilt: f64, roll: f64) -> Self {
        self.orbit_step = orbit;
        self.tilt_step = tilt;
        self.roll_step = roll;
        self
    }

    /// Sets the pan distance per event.
    pub fn with_pan_step(mut self, step: f64) -> Self {
        self.pan_step = step;
        self
    }

    /// Sets the per-tick smoothing factors.
    pub fn with_smoothing(mut self, angle: f64, radius: f64) -> Self {
        self.angle_smoothing = angle;
        self.radius_smoothing = radius;
        self
    }

    /// Sets the zoom multipliers.
    pub fn with_zoom_factors(mut self, zoom_in: f64, zoom_out: f64) -> Self {
        self.zoom_in_factor = zoom_in;
        self.zoom_out_factor = zoom_out;
        self
    }
}

/// Configuration of a [`Viewer`](crate::Viewer).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    /// Side length of the square canvas, in pixels.
    pub canvas_size: f64,
    /// Camera position before the first tick.
    pub initial_camera: Point3<f64>,
    /// Camera zoom before any zoom event.
    pub initial_zoom: f64,
    /// Outline color handed to the drawing surface.
    pub stroke: Color,
    pub orbit: OrbitSettings,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            canvas_size: 600.0,
            initial_camera: Point3::new(0.0, 300.0, -1200.0),
            initial_zoom: 1.0,
            stroke: Color::rgb(0x33, 0x33, 0x33),
            orbit: OrbitSettings::default(),
        }
    }
}

impl ViewSettings {
    pub fn with_canvas_size(mut self, size: f64) -> Self {
        self.canvas_size = size;
        self
    }

    pub fn with_camera(mut self, position: Point3<f64>, zoom: f64) -> Self {
        self.initial_camera = position;
        self.initial_zoom = zoom;
        self
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_orbit(mut self, orbit: OrbitSettings) -> Self {
        self.orbit = orbit;
        self
    }
}
