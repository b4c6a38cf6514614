use core::{
    fmt,
    ops::*,
};
use crate::*;
use super::{generic_matrix, matrix_entries, minor_vals, cofactor_sign};

generic_matrix!{ doc = "4x4 matrix (row-major order)"; Mat4, 4, Vec4;
    f32m4 => f32
    f64m4 => f64
}

matrix_entries!{ Mat4;
    m00, set_m00 =>  0,  m01, set_m01 =>  1,  m02, set_m02 =>  2,  m03, set_m03 =>  3,
    m10, set_m10 =>  4,  m11, set_m11 =>  5,  m12, set_m12 =>  6,  m13, set_m13 =>  7,
    m20, set_m20 =>  8,  m21, set_m21 =>  9,  m22, set_m22 => 10,  m23, set_m23 => 11,
    m30, set_m30 => 12,  m31, set_m31 => 13,  m32, set_m32 => 14,  m33, set_m33 => 15,
}

impl<T: Real> Mat4<T> {
    /// Create a matrix from its entries, row by row
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: T, m01: T, m02: T, m03: T,
               m10: T, m11: T, m12: T, m13: T,
               m20: T, m21: T, m22: T, m23: T,
               m30: T, m31: T, m32: T, m33: T) -> Self {
        Self { vals: [m00, m01, m02, m03,
                      m10, m11, m12, m13,
                      m20, m21, m22, m23,
                      m30, m31, m32, m33] }
    }

    /// Overwrite all entries, row by row
    #[allow(clippy::too_many_arguments)]
    pub fn set(&mut self, m00: T, m01: T, m02: T, m03: T,
                          m10: T, m11: T, m12: T, m13: T,
                          m20: T, m21: T, m22: T, m23: T,
                          m30: T, m31: T, m32: T, m33: T) -> &mut Self {
        *self = Self::new(m00, m01, m02, m03,
                          m10, m11, m12, m13,
                          m20, m21, m22, m23,
                          m30, m31, m32, m33);
        self
    }

    /// Get the 3x3 matrix that remains after removing `row` and `column`
    #[must_use]
    pub fn minor(&self, row: usize, column: usize) -> Mat3<T> {
        Mat3::from_array(minor_vals(&self.vals, 4, row, column))
    }

    /// Calculate the cofactor of the entry at `row` and `column`: the signed determinant of its 3x3 minor
    #[must_use]
    pub fn cofactor(&self, row: usize, column: usize) -> T {
        cofactor_sign::<T>(row, column) * self.minor(row, column).determinant()
    }

    /// Calculate the determinant, expanded along the first row
    #[must_use]
    pub fn determinant(&self) -> T {
        (0..4).fold(T::zero(), |acc, col| acc + self.vals[col] * self.cofactor(0, col))
    }

    /// Calculate the adjugate (transposed cofactor matrix), `self * self.adjugate() == self.determinant() * I`
    #[must_use]
    pub fn adjugate(&self) -> Self {
        Self { vals: core::array::from_fn(|idx| self.cofactor(idx % 4, idx / 4)) }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn sample() -> f64m4 {
        Mat4::new(1.0, 0.0, 2.0, -1.0,
                  3.0, 0.0, 0.0,  5.0,
                  2.0, 1.0, 4.0, -3.0,
                  1.0, 0.0, 5.0,  0.0)
    }

    #[test]
    fn test_minor_cofactor() {
        let m = sample();
        assert_eq!(m.minor(0, 0), Mat3::new(0.0, 0.0,  5.0,
                                            1.0, 4.0, -3.0,
                                            0.0, 5.0,  0.0));
        assert_eq!(m.minor(2, 3), Mat3::new(1.0, 0.0, 2.0,
                                            3.0, 0.0, 0.0,
                                            1.0, 0.0, 5.0));
        assert_eq!(m.cofactor(0, 0), 25.0);
        assert_eq!(m.cofactor(0, 1), -75.0);
        assert_eq!(m.cofactor(2, 1), 30.0);
    }

    #[test]
    fn test_determinant() {
        assert_eq!(sample().determinant(), 30.0);
        assert_eq!(f64m4::identity().determinant(), 1.0);

        let mut singular = sample();
        singular.set_m30(2.0).set_m31(1.0).set_m32(4.0).set_m33(-3.0);
        assert_eq!(singular.determinant(), 0.0);
        assert_eq!(singular.invert(), None);
    }

    #[test]
    fn test_adjugate() {
        let m = sample();
        let adj = m.adjugate();
        assert_eq!(adj, Mat4::new( 25.0,  5.0,  0.0, -10.0,
                                  -75.0,  3.0, 30.0,   6.0,
                                   -5.0, -1.0,  0.0,   8.0,
                                  -15.0,  3.0,  0.0,   6.0));

        let mut expected = f64m4::identity();
        expected.multiply_scalar(30.0);
        assert!((m * adj).exact_equals(&expected));
    }

    #[test]
    fn test_invert() {
        let m = sample();
        let inv = m.invert().unwrap();
        assert!(inv.equals(&(m.adjugate() * (1f64 / 30.0))));
        assert!((m * inv).equals(&Mat4::identity()));
        assert!((inv * m).equals(&Mat4::identity()));
    }

    #[test]
    fn test_transpose() {
        let mut m = sample();
        m.transpose();
        assert_eq!(m.row(0), Vec4::new(1.0, 3.0, 2.0, 1.0));
        assert_eq!(m.column(3), Vec4::new(1.0, 0.0, 5.0, 0.0));
        assert_eq!(m[(3, 0)], -1.0);
        m.transpose();
        assert!(m.exact_equals(&sample()));
    }

    #[test]
    fn test_add_subtract() {
        let mut m = sample();
        m += f64m4::identity();
        assert_eq!(m.m00(), 2.0);
        assert_eq!(m.m11(), 1.0);
        m -= f64m4::identity();
        assert_eq!(m, sample());

        m.subtract(&sample());
        assert_eq!(m, f64m4::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(f32m4::identity().to_string(), "Mat4\n[1 0 0 0\n0 1 0 0\n0 0 1 0\n0 0 0 1]");
    }
}
