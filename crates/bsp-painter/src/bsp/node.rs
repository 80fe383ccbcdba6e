//! BSP tree node implementation.

use crate::{Plane3D, Polygon};

/// A node in the BSP tree.
///
/// Each node partitions space using the plane of its divider polygon and
/// stores every polygon coplanar with that plane, divider first. Polygons
/// in front of or behind the plane live in the respective child subtrees,
/// which the node owns exclusively.
#[derive(Debug, Clone)]
pub struct BspNode {
    /// The splitting plane for this node.
    plane: Plane3D,

    /// Polygons coplanar with the plane, in classification order.
    polygons: Vec<Polygon>,

    /// Subtree containing polygons in FRONT of the splitting plane.
    front: Option<Box<BspNode>>,

    /// Subtree containing polygons BEHIND the splitting plane.
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a leaf node from a divider polygon and its plane.
    pub fn new(plane: Plane3D, divider: Polygon) -> Self {
        Self::with_coplanar(plane, vec![divider])
    }

    /// Creates a leaf node with a splitting plane and its coplanar polygons.
    pub fn with_coplanar(plane: Plane3D, polygons: Vec<Polygon>) -> Self {
        Self {
            plane,
            polygons,
            front: None,
            back: None,
        }
    }

    /// Returns a reference to the splitting plane.
    #[inline]
    pub fn plane(&self) -> &Plane3D {
        &self.plane
    }

    /// Returns the polygon whose plane partitions this node, if any.
    #[inline]
    pub fn divider(&self) -> Option<&Polygon> {
        self.polygons.first()
    }

    /// Returns the polygons coplanar with the splitting plane.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns a reference to the front child subtree.
    #[inline]
    pub fn front(&self) -> Option<&BspNode> {
        self.front.as_deref()
    }

    /// Returns a reference to the back child subtree.
    #[inline]
    pub fn back(&self) -> Option<&BspNode> {
        self.back.as_deref()
    }

    /// Sets the front child subtree.
    #[inline]
    pub fn set_front(&mut self, node: Option<BspNode>) {
        self.front = node.map(Box::new);
    }

    /// Sets the back child subtree.
    #[inline]
    pub fn set_back(&mut self, node: Option<BspNode>) {
        self.back = node.map(Box::new);
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    /// Returns the total number of polygons in this subtree (including all descendants).
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
            + self.front.as_ref().map_or(0, |n| n.polygon_count())
            + self.back.as_ref().map_or(0, |n| n.polygon_count())
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        let front_depth = self.front.as_ref().map_or(0, |n| n.depth());
        let back_depth = self.back.as_ref().map_or(0, |n| n.depth());
        1 + front_depth.max(back_depth)
    }
}
