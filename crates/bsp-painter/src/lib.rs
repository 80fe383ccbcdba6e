//! Painter's-algorithm rendering core.
//!
//! A [`BspTree`] built once over a static scene orders opaque polygons back
//! to front for any viewpoint, and an [`OrbitController`] moves a [`Camera`]
//! around the scene with smoothed, pole-safe spherical coordinates. A
//! [`Viewer`] ties the two together and emits one projected [`Frame`] per tick
//! for an external 2D drawing surface.

pub mod bsp;
mod camera;
mod color;
mod control;
mod error;
mod frame;
pub mod math;
mod orbit;
mod plane;
mod polygon;
mod settings;
mod transform;

pub use bsp::{
    BspNode, BspTree, BspVisitor, BuildStats, CollectingVisitor, FirstPolygon, FnVisitor,
    PlaneSelector,
};
pub use camera::{Camera, ProjectedVertex, BEHIND_SENTINEL, FOCAL_LENGTH, NEAR_PLANE};
pub use color::Color;
pub use control::{ControlAction, ControlEffect};
pub use error::{ColorError, GeometryError, ParseControlError};
pub use frame::{Frame, ProjectedPolygon, Viewer};
pub use orbit::{OrbitController, Smoothed, Spherical};
pub use plane::{Classification, Plane3D, PlaneSide, PLANE_EPSILON};
pub use polygon::Polygon;
pub use settings::{OrbitSettings, ViewSettings};
pub use transform::Transform;
