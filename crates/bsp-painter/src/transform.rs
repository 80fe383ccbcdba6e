//! 4×4 affine transforms.

use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// An affine transform stored as a 4×4 matrix.
///
/// Every transform built through this type keeps `(0, 0, 0, 1)` as its
/// bottom row, so points never need a perspective divide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix4<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// A pure translation by `offset`.
    pub fn translation(offset: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&offset),
        }
    }

    /// A pure rotation whose rows are the three given axes.
    ///
    /// Used by the look-at construction: rows `right`, `up`, `forward` map
    /// world directions into camera space.
    pub fn from_rows(x: Vector3<f64>, y: Vector3<f64>, z: Vector3<f64>) -> Self {
        let rotation = Matrix3::from_rows(&[x.transpose(), y.transpose(), z.transpose()]);
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Returns `self ∘ other`: `other` is applied first, then `self`.
    pub fn compose(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// Applies the transform to a point (translation included).
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let h = self.matrix * point.to_homogeneous();
        Point3::new(h.x, h.y, h.z)
    }

    /// Applies only the linear part to a direction (translation ignored).
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Returns the first three components of column `index` (0..=3).
    ///
    /// For a camera basis (the transposed view rotation) columns 0, 1 and 2
    /// are the camera's right, up and forward axes in world space.
    pub fn axis(&self, index: usize) -> Vector3<f64> {
        let column = self.matrix.column(index);
        Vector3::new(column[0], column[1], column[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_moves_points_not_vectors() {
        let t = Transform::translation(Vector3::new(1.0, -2.0, 3.0));
        let p = t.transform_point(&Point3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Point3::new(2.0, -1.0, 4.0));

        let v = t.transform_vector(&Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(v, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn compose_applies_right_operand_first() {
        // Swap x and z, then translate along x
        let swap = Transform::from_rows(Vector3::z(), Vector3::y(), Vector3::x());
        let shift = Transform::translation(Vector3::new(10.0, 0.0, 0.0));

        let p = Point3::new(1.0, 2.0, 3.0);
        let shift_then_swap = swap.compose(&shift).transform_point(&p);
        assert_eq!(shift_then_swap, Point3::new(3.0, 2.0, 11.0));

        let swap_then_shift = shift.compose(&swap).transform_point(&p);
        assert_eq!(swap_then_shift, Point3::new(13.0, 2.0, 1.0));
    }

    #[test]
    fn view_style_composition_moves_eye_to_origin() {
        let eye = Point3::new(4.0, 5.0, 6.0);
        let rot = Transform::from_rows(Vector3::y(), -Vector3::x(), Vector3::z());
        let view = rot.compose(&Transform::translation(-eye.coords));

        assert_eq!(view.transform_point(&eye), Point3::origin());
        // One unit along +x from the eye lands on the second row's -1
        let p = view.transform_point(&Point3::new(5.0, 5.0, 6.0));
        assert_eq!(p, Point3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn transpose_of_rotation_exposes_rows_as_columns() {
        let right = Vector3::new(0.0, 0.0, -1.0);
        let up = Vector3::y();
        let forward = Vector3::x();
        let basis = Transform::from_rows(right, up, forward).transpose();

        assert_eq!(basis.axis(0), right);
        assert_eq!(basis.axis(1), up);
        assert_eq!(basis.axis(2), forward);
    }
}
