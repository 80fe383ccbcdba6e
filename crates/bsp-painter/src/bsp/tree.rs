//! BSP tree container and construction.

use nalgebra::{Point3, Vector3};
use tracing::{debug, warn};

use crate::{Classification, PlaneSide, Polygon};

use super::node::BspNode;
use super::selector::{FirstPolygon, PlaneSelector};
use super::visitor::{BspVisitor, CollectingVisitor};

/// Counters gathered while building a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Polygons handed to the builder.
    pub input: usize,
    /// Polygons stored in the finished tree.
    pub kept: usize,
    /// Polygons dropped because they straddled a partition plane.
    pub spanning_discarded: usize,
    /// Polygons dropped because they have no well-defined plane.
    pub degenerate_discarded: usize,
}

/// A Binary Space Partitioning tree over a static set of polygons.
///
/// Each node contains polygons that are coplanar with its splitting plane,
/// while the remaining polygons are stored in front or back subtrees.
///
/// # Construction
///
/// ```ignore
/// use bsp_painter::{BspTree, FirstPolygon, Polygon};
///
/// let polygons: Vec<Polygon> = /* ... */;
/// let tree = BspTree::build(polygons, &FirstPolygon);
/// ```
///
/// Polygons that straddle a partition plane are not split; they are dropped
/// with a warning and counted in [`BuildStats::spanning_discarded`].
///
/// # Traversal
///
/// ```ignore
/// let ordered = tree.back_to_front(camera_position);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BspTree {
    root: Option<BspNode>,
    stats: BuildStats,
}

impl BspTree {
    /// Creates an empty BSP tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a BSP tree from a collection of polygons.
    ///
    /// Uses the provided [`PlaneSelector`] to choose dividers. Degenerate
    /// polygons are skipped up front since they cannot define a plane.
    ///
    /// Returns an empty tree if no usable polygon remains.
    pub fn build<S: PlaneSelector>(polygons: Vec<Polygon>, selector: &S) -> Self {
        let mut stats = BuildStats {
            input: polygons.len(),
            ..BuildStats::default()
        };

        let polygons: Vec<Polygon> = polygons
            .into_iter()
            .filter(|polygon| {
                let usable = polygon.len() >= 3 && polygon.plane().is_some();
                if !usable {
                    warn!(
                        vertices = polygon.len(),
                        "Polygon has no well-defined plane and is ignored"
                    );
                    stats.degenerate_discarded += 1;
                }
                usable
            })
            .collect();

        let root = build_node(polygons, selector, &mut stats);
        stats.kept = root.as_ref().map_or(0, |n| n.polygon_count());

        debug!(
            input = stats.input,
            kept = stats.kept,
            spanning = stats.spanning_discarded,
            degenerate = stats.degenerate_discarded,
            depth = root.as_ref().map_or(0, |n| n.depth()),
            "BSP tree built"
        );

        Self { root, stats }
    }

    /// Builds a BSP tree using the default plane selector ([`FirstPolygon`]).
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self::build(polygons, &FirstPolygon)
    }

    /// Returns `true` if the tree contains no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&BspNode> {
        self.root.as_ref()
    }

    /// Returns the counters recorded while building.
    #[inline]
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Returns the total number of polygons in the tree.
    pub fn polygon_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.polygon_count())
    }

    /// Returns the maximum depth of the tree (0 for empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }

    /// Traverses the tree back-to-front relative to the given viewpoint.
    ///
    /// This is the painter's algorithm order: farther polygons are visited
    /// first so nearer ones are drawn over them. When the eye lies on a
    /// node's plane the back subtree is visited first.
    pub fn traverse_back_to_front<'a, V: BspVisitor<'a>>(
        &'a self,
        eye: Point3<f64>,
        visitor: &mut V,
    ) {
        if let Some(ref root) = self.root {
            traverse_back_to_front_node(root, &eye, visitor);
        }
    }

    /// Traverses the tree front-to-back relative to the given viewpoint.
    ///
    /// This is exactly the reverse of [`traverse_back_to_front`](Self::traverse_back_to_front).
    pub fn traverse_front_to_back<'a, V: BspVisitor<'a>>(
        &'a self,
        eye: Point3<f64>,
        visitor: &mut V,
    ) {
        if let Some(ref root) = self.root {
            traverse_front_to_back_node(root, &eye, visitor);
        }
    }

    /// Returns every polygon in painter's order for the given viewpoint.
    pub fn back_to_front(&self, eye: Point3<f64>) -> Vec<&Polygon> {
        let mut visitor = CollectingVisitor::new();
        self.traverse_back_to_front(eye, &mut visitor);
        visitor.into_polygons()
    }

    /// Collects all polygons in the tree.
    ///
    /// The order of polygons is not guaranteed.
    pub fn collect_polygons(&self) -> Vec<&Polygon> {
        let mut result = Vec::with_capacity(self.polygon_count());
        collect_polygons_recursive(self.root.as_ref(), &mut result);
        result
    }

    /// Returns the mean of all polygon centroids, or the origin for an empty tree.
    pub fn scene_center(&self) -> Point3<f64> {
        scene_center(self.collect_polygons())
    }
}

/// Returns the mean of the given polygons' centroids, or the origin if there are none.
pub fn scene_center<'a, I>(polygons: I) -> Point3<f64>
where
    I: IntoIterator<Item = &'a Polygon>,
{
    let (sum, count) = polygons
        .into_iter()
        .fold((Vector3::zeros(), 0usize), |(sum, count), polygon| {
            (sum + polygon.centroid().coords, count + 1)
        });

    if count == 0 {
        Point3::origin()
    } else {
        Point3::from(sum / count as f64)
    }
}

/// Recursively builds a BSP node from a list of polygons.
fn build_node<S: PlaneSelector>(
    mut polygons: Vec<Polygon>,
    selector: &S,
    stats: &mut BuildStats,
) -> Option<BspNode> {
    let index = selector.select(&polygons)?;
    let divider = polygons.remove(index);
    let plane = divider.plane()?;

    let mut coplanar = vec![divider];
    let mut front_list = Vec::new();
    let mut back_list = Vec::new();

    for polygon in polygons {
        match polygon.classify(&plane) {
            Classification::Front => front_list.push(polygon),
            Classification::Back => back_list.push(polygon),
            Classification::Coplanar => coplanar.push(polygon),
            Classification::Spanning => {
                warn!(
                    centroid = ?polygon.centroid(),
                    "Polygon spans divider plane and is ignored (no split implemented)"
                );
                stats.spanning_discarded += 1;
            }
        }
    }

    let mut node = BspNode::with_coplanar(plane, coplanar);
    node.set_front(build_node(front_list, selector, stats));
    node.set_back(build_node(back_list, selector, stats));

    Some(node)
}

/// Traverses a node subtree back-to-front.
fn traverse_back_to_front_node<'a, V: BspVisitor<'a>>(
    node: &'a BspNode,
    eye: &Point3<f64>,
    visitor: &mut V,
) {
    let (first, second) = match node.plane().classify_point(eye) {
        // Eye is in front (or on the plane): back subtree is farther
        PlaneSide::Front | PlaneSide::OnPlane => (node.back(), node.front()),
        // Eye is behind: front subtree is farther
        PlaneSide::Back => (node.front(), node.back()),
    };

    if let Some(first) = first {
        traverse_back_to_front_node(first, eye, visitor);
    }
    visitor.visit(node.polygons());
    if let Some(second) = second {
        traverse_back_to_front_node(second, eye, visitor);
    }
}

/// Traverses a node subtree front-to-back.
fn traverse_front_to_back_node<'a, V: BspVisitor<'a>>(
    node: &'a BspNode,
    eye: &Point3<f64>,
    visitor: &mut V,
) {
    let (first, second) = match node.plane().classify_point(eye) {
        PlaneSide::Front | PlaneSide::OnPlane => (node.front(), node.back()),
        PlaneSide::Back => (node.back(), node.front()),
    };

    if let Some(first) = first {
        traverse_front_to_back_node(first, eye, visitor);
    }
    // Reverse within the node so this order mirrors back-to-front exactly
    for polygon in node.polygons().iter().rev() {
        visitor.visit(std::slice::from_ref(polygon));
    }
    if let Some(second) = second {
        traverse_front_to_back_node(second, eye, visitor);
    }
}

/// Recursively collects all polygons from a node subtree.
fn collect_polygons_recursive<'a>(node: Option<&'a BspNode>, result: &mut Vec<&'a Polygon>) {
    if let Some(n) = node {
        result.extend(n.polygons());
        collect_polygons_recursive(n.front(), result);
        collect_polygons_recursive(n.back(), result);
    }
}
