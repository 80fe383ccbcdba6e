//! Visitor pattern for BSP tree traversal.
//!
//! Visitors receive polygons by reference in traversal order, so a renderer
//! can project and draw them without cloning the scene every frame.

use crate::Polygon;

/// Visitor for processing polygons during BSP tree traversal.
///
/// The lifetime `'a` ties visited polygons to the tree being traversed.
pub trait BspVisitor<'a> {
    /// Called once per node with the polygons coplanar with its plane.
    fn visit(&mut self, polygons: &'a [Polygon]);
}

/// A simple visitor that collects references to all visited polygons.
#[derive(Debug, Default)]
pub struct CollectingVisitor<'a> {
    collected: Vec<&'a Polygon>,
}

impl<'a> CollectingVisitor<'a> {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected polygons in visiting order.
    pub fn into_polygons(self) -> Vec<&'a Polygon> {
        self.collected
    }

    /// Returns the collected polygons.
    pub fn polygons(&self) -> &[&'a Polygon] {
        &self.collected
    }
}

impl<'a> BspVisitor<'a> for CollectingVisitor<'a> {
    fn visit(&mut self, polygons: &'a [Polygon]) {
        self.collected.extend(polygons.iter());
    }
}

/// A visitor that calls a closure for each polygon group.
pub struct FnVisitor<F> {
    func: F,
}

impl<F> FnVisitor<F> {
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<'a, F> BspVisitor<'a> for FnVisitor<F>
where
    F: FnMut(&'a [Polygon]),
{
    fn visit(&mut self, polygons: &'a [Polygon]) {
        (self.func)(polygons);
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
    fn collecting_visitor_empty() {
        let visitor = CollectingVisitor::new();
        assert!(visitor.polygons().is_empty());
    }

    #[test]
    fn collecting_visitor_collects_in_order() {
        let first = [make_triangle(0.0)];
        let second = [make_triangle(1.0), make_triangle(2.0)];

        let mut visitor = CollectingVisitor::new();
        visitor.visit(&first);
        visitor.visit(&second);

        let collected = visitor.into_polygons();
        assert_eq!(collected.len(), 3);
        assert_eq!(collected[0], &first[0]);
        assert_eq!(collected[2], &second[1]);
    }

    #[test]
    fn fn_visitor_calls_closure() {
        let polys = [make_triangle(0.0), make_triangle(1.0)];
        let mut count = 0;
        {
            let mut visitor = FnVisitor::new(|group: &[Polygon]| {
                count += group.len();
            });
            visitor.visit(&polys);
        }
        assert_eq!(count, 2);
    }
}
