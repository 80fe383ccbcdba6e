//! Divider selection strategies for BSP tree construction.
//!
//! The choice of divider affects tree balance and how many polygons end up
//! spanning a partition plane (and are therefore dropped).

use crate::Polygon;

/// Strategy for selecting which polygon's plane divides a BSP node.
pub trait PlaneSelector {
    /// Returns the index of the divider within `polygons`.
    ///
    /// Returns `None` if the slice is empty. A returned index must be in bounds.
    fn select(&self, polygons: &[Polygon]) -> Option<usize>;
}

/// Selects the first polygon in the list.
///
/// This makes the tree shape a pure function of input order, so the same
/// scene always yields the same draw order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPolygon;

impl PlaneSelector for FirstPolygon {
    fn select(&self, polygons: &[Polygon]) -> Option<usize> {
        (!polygons.is_empty()).then_some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use nalgebra::Point3;

    fn make_triangle(z: f64) -> Polygon {
        Polygon::new(
            vec![
                Point3::new(0.0, 0.0, z),
                Point3::new(1.0, 0.0, z),
                Point3::new(0.0, 1.0, z),
            ],
            Color::WHITE,
        )
    }

    #[test]
    fn first_polygon_empty_list() {
        let polygons: Vec<Polygon> = vec![];
        assert!(FirstPolygon.select(&polygons).is_none());
    }

    #[test]
    fn first_polygon_multiple() {
        let polygons = vec![make_triangle(0.0), make_triangle(1.0)];
        assert_eq!(FirstPolygon.select(&polygons), Some(0));
    }
}
