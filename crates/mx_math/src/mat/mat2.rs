use core::{
    fmt,
    ops::*,
};
use crate::*;
use super::{generic_matrix, matrix_entries};

generic_matrix!{ doc = "2x2 matrix (row-major order)"; Mat2, 2, Vec2;
    f32m2 => f32
    f64m2 => f64
}

matrix_entries!{ Mat2;
    m00, set_m00 => 0,  m01, set_m01 => 1,
    m10, set_m10 => 2,  m11, set_m11 => 3,
}

impl<T: Real> Mat2<T> {
    /// Create a matrix from its entries, row by row
    #[inline]
    #[must_use]
    pub fn new(m00: T, m01: T,
               m10: T, m11: T) -> Self {
        Self { vals: [m00, m01,
                      m10, m11] }
    }

    /// Overwrite all entries, row by row
    pub fn set(&mut self, m00: T, m01: T,
                          m10: T, m11: T) -> &mut Self {
        self.vals = [m00, m01, m10, m11];
        self
    }

    /// Create a matrix that rotates counter-clockwise by `rad` radians
    #[must_use]
    pub fn from_rotation(rad: T) -> Self {
        let (sin, cos) = rad.sin_cos();
        Self { vals: [cos, -sin,
                      sin,  cos] }
    }

    /// Rotate the matrix by `rad` radians, i.e. `self = self * from_rotation(rad)`
    pub fn rotate(&mut self, rad: T) -> &mut Self {
        self.multiply(&Self::from_rotation(rad))
    }

    /// Calculate the determinant
    #[inline]
    #[must_use]
    pub fn determinant(&self) -> T {
        self.vals[0] * self.vals[3] - self.vals[1] * self.vals[2]
    }

    /// Calculate the adjugate, `self * self.adjugate() == self.determinant() * I`
    #[must_use]
    pub fn adjugate(&self) -> Self {
        Self { vals: [ self.vals[3], -self.vals[1],
                      -self.vals[2],  self.vals[0]] }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_determinant() {
        assert_eq!(f64m2::new(1.0, 2.0, 3.0, 4.0).determinant(), -2.0);
        assert_eq!(f64m2::new(1.0, 2.0, 2.0, 4.0).determinant(), 0.0);
        assert_eq!(f64m2::identity().determinant(), 1.0);
    }

    #[test]
    fn test_invert() {
        assert_eq!(f64m2::new(1.0, 2.0, 2.0, 4.0).invert(), None);

        let m = f64m2::new(4.0, 3.0, 3.0, 2.0);
        let inv = m.invert().unwrap();
        assert!(inv.exact_equals(&Mat2::new(-2.0, 3.0, 3.0, -4.0)));
        assert!((m * inv).equals(&Mat2::identity()));

        let inv = f64m2::new(2.0, 1.0, 1.0, 2.0).invert().unwrap();
        assert!(inv.equals(&Mat2::new(2.0 / 3.0, -1.0 / 3.0, -1.0 / 3.0, 2.0 / 3.0)));

        // Receiver is left untouched
        assert_eq!(m, Mat2::new(4.0, 3.0, 3.0, 2.0));
    }

    #[test]
    fn test_adjugate() {
        let m = f64m2::new(1.0, 2.0, 3.0, 4.0);
        let adj = m.adjugate();
        assert_eq!(adj, Mat2::new(4.0, -2.0, -3.0, 1.0));

        let mut expected = f64m2::identity();
        expected.multiply_scalar(m.determinant());
        assert!((m * adj).exact_equals(&expected));
    }

    #[test]
    fn test_multiply() {
        let mut m = f64m2::new(1.0, 2.0, 3.0, 4.0);
        m.multiply(&Mat2::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(m, Mat2::new(19.0, 22.0, 43.0, 50.0));

        let mut m = f64m2::new(1.0, 2.0, 3.0, 4.0);
        m.add(&Mat2::new(1.0, 1.0, 1.0, 1.0)).subtract(&Mat2::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(m, Mat2::new(2.0, 3.0, 2.0, 3.0));
    }

    #[test]
    fn test_transpose() {
        let mut m = f32m2::new(1.0, 2.0, 3.0, 4.0);
        m.transpose();
        assert_eq!(m, Mat2::new(1.0, 3.0, 2.0, 4.0));
        assert_eq!(m.m01(), 3.0);
        assert_eq!(m.m10(), 2.0);
        assert_eq!(m[(0, 1)], 3.0);
    }

    #[test]
    fn test_rotate_scale() {
        let mut m = f64m2::identity();
        m.rotate(f64::HALF_PI);
        assert!(m.equals(&Mat2::new(0.0, -1.0, 1.0, 0.0)));

        let mut m = f64m2::new(1.0, 2.0, 3.0, 4.0);
        m.scale(&Vec2::new(2.0, 3.0));
        assert_eq!(m, Mat2::new(2.0, 6.0, 6.0, 12.0));
        assert_eq!(f64m2::from_scale(&Vec2::new(2.0, 3.0)), Mat2::new(2.0, 0.0, 0.0, 3.0));
    }

    #[test]
    fn test_accessors() {
        let mut m = f64m2::default();
        assert!(m.exact_equals(&Mat2::identity()));

        m.set_m01(5.0).set_m10(-1.0);
        assert_eq!(m.to_array(), [1.0, 5.0, -1.0, 1.0]);
        assert_eq!(m.row(0), Vec2::new(1.0, 5.0));
        assert_eq!(m.column(0), Vec2::new(1.0, -1.0));

        let mut copy = f64m2::zero();
        copy.copy_from(&m);
        m.set_identity();
        assert_eq!(copy.m01(), 5.0);
        assert_eq!(m, Mat2::identity());

        m.set(1.0, 2.0, 3.0, 4.0);
        m[3] = 8.0;
        assert_eq!(m.m11(), 8.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(f64m2::new(1.0, 2.0, 3.0, 4.0).to_string(), "Mat2\n[1 2\n3 4]");
    }
}
