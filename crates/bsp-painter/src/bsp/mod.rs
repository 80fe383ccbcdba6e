//! Binary Space Partitioning tree for painter's-algorithm ordering.
//!
//! The tree is built once from the static scene. Afterwards, for any camera
//! position, it yields the polygons in an order where nothing drawn later
//! can be hidden by something drawn earlier, with no depth buffer involved.
//!
//! # Example
//!
//! ```ignore
//! use bsp_painter::{BspTree, CollectingVisitor, Polygon};
//! use nalgebra::Point3;
//!
//! // Build a tree from polygons
//! let polygons: Vec<Polygon> = /* create polygons */;
//! let tree = BspTree::from_polygons(polygons);
//!
//! // Traverse back-to-front for rendering
//! let eye = Point3::new(0.0, 0.0, 10.0);  // The location of the viewer
//! let mut visitor = CollectingVisitor::new();
//! tree.traverse_back_to_front(eye, &mut visitor);
//!
//! // Get polygons in draw order
//! let ordered_polygons = visitor.into_polygons();
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: The main container holding the root node and build counters
//! - [`BspNode`]: Internal nodes storing a splitting plane and coplanar polygons
//! - [`PlaneSelector`]: Strategy trait for choosing dividers
//! - [`BspVisitor`]: Visitor trait for custom traversal behavior
//!
//! # Limitations
//!
//! Polygons spanning a partition plane are dropped rather than split.

mod node;
mod selector;
mod tree;
mod visitor;

// Re-export main types
pub use node::BspNode;
pub use selector::{FirstPolygon, PlaneSelector};
pub use tree::{scene_center, BspTree, BuildStats};
pub use visitor::{BspVisitor, CollectingVisitor, FnVisitor};
