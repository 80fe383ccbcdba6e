//! Filled convex polygon representation.

use nalgebra::{Point3, Vector3};

use crate::error::GeometryError;
use crate::math::NORMALIZE_EPSILON;
use crate::{Classification, Color, Plane3D, PlaneSide};

/// A convex polygon in 3D space, defined by an ordered list of vertices and a fill color.
///
/// Vertices should be coplanar. Their winding order determines the normal
/// direction via the right-hand rule on the first three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3<f64>>,
    fill: Color,
}

impl Polygon {
    /// Creates a new polygon from a list of vertices and a fill color.
    ///
    /// # Panics (debug builds only)
    /// - Panics if fewer than 3 vertices are provided.
    /// - Panics if vertices are not coplanar.
    ///
    /// Collinear leading vertices are accepted; such polygons have no plane
    /// and are dropped when a tree is built.
    pub fn new(vertices: Vec<Point3<f64>>, fill: Color) -> Self {
        debug_assert!(
            vertices.len() >= 3,
            "Polygon must have at least 3 vertices"
        );
        debug_assert!(
            !matches!(
                Self::check_coplanar(&vertices),
                Err(GeometryError::NotCoplanar { .. })
            ),
            "Polygon vertices must be coplanar"
        );
        Self { vertices, fill }
    }

    /// Creates a polygon, validating vertex count, planarity and degeneracy.
    pub fn try_new(vertices: Vec<Point3<f64>>, fill: Color) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        Self::check_coplanar(&vertices)?;
        Ok(Self { vertices, fill })
    }

    /// Checks that all vertices lie on the plane of the first three.
    fn check_coplanar(vertices: &[Point3<f64>]) -> Result<(), GeometryError> {
        if vertices.len() < 3 {
            return Ok(());
        }

        let plane = Plane3D::from_three_points(vertices[0], vertices[1], vertices[2])
            .ok_or(GeometryError::Degenerate)?;

        for (index, v) in vertices.iter().enumerate().skip(3) {
            if plane.classify_point(v) != PlaneSide::OnPlane {
                return Err(GeometryError::NotCoplanar {
                    index,
                    distance: plane.signed_distance(v),
                });
            }
        }
        Ok(())
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Returns the fill color.
    #[inline]
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices (always false for valid polygons).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Computes the (unnormalized) normal vector of the polygon.
    ///
    /// Uses the first three vertices: `(v1 - v0) × (v2 - v0)`.
    /// Returns the zero vector for polygons with fewer than three vertices.
    pub fn normal(&self) -> Vector3<f64> {
        match self.vertices.as_slice() {
            [a, b, c, ..] => (b - a).cross(&(c - a)),
            _ => Vector3::zeros(),
        }
    }

    /// Computes the unit normal vector of the polygon.
    ///
    /// Returns `None` if the first three vertices are collinear.
    pub fn unit_normal(&self) -> Option<Vector3<f64>> {
        self.normal().try_normalize(NORMALIZE_EPSILON)
    }

    /// Returns the plane that this polygon lies on.
    ///
    /// Returns `None` if the polygon is degenerate.
    pub fn plane(&self) -> Option<Plane3D> {
        Plane3D::from_point_and_normal(*self.vertices.first()?, self.normal())
    }

    /// Computes the centroid (vertex average) of the polygon.
    pub fn centroid(&self) -> Point3<f64> {
        let sum: Vector3<f64> = self.vertices.iter().map(|p| p.coords).sum();
        Point3::from(sum / self.vertices.len().max(1) as f64)
    }

    /// Classifies this polygon relative to a plane.
    ///
    /// Returns:
    /// - `Coplanar` if all vertices lie on the plane
    /// - `Front` if no vertex is behind the plane
    /// - `Back` if no vertex is in front of the plane
    /// - `Spanning` if vertices are on both sides
    pub fn classify(&self, plane: &Plane3D) -> Classification {
        let mut front = 0;
        let mut back = 0;

        for vertex in &self.vertices {
            match plane.classify_point(vertex) {
                PlaneSide::Front => front += 1,
                PlaneSide::Back => back += 1,
                PlaneSide::OnPlane => {}
            }
        }

        match (front, back) {
            (0, 0) => Classification::Coplanar,
            (_, 0) => Classification::Front,
            (0, _) => Classification::Back,
            _ => Classification::Spanning,
        }
    }
}
