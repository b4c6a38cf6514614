use core::{
    fmt,
    ops::*,
};
use crate::*;
use super::{generic_matrix, matrix_entries, minor_vals, cofactor_sign};

generic_matrix!{ doc = "3x3 matrix (row-major order)"; Mat3, 3, Vec3;
    f32m3 => f32
    f64m3 => f64
}

matrix_entries!{ Mat3;
    m00, set_m00 => 0,  m01, set_m01 => 1,  m02, set_m02 => 2,
    m10, set_m10 => 3,  m11, set_m11 => 4,  m12, set_m12 => 5,
    m20, set_m20 => 6,  m21, set_m21 => 7,  m22, set_m22 => 8,
}

impl<T: Real> Mat3<T> {
    /// Create a matrix from its entries, row by row
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: T, m01: T, m02: T,
               m10: T, m11: T, m12: T,
               m20: T, m21: T, m22: T) -> Self {
        Self { vals: [m00, m01, m02,
                      m10, m11, m12,
                      m20, m21, m22] }
    }

    /// Overwrite all entries, row by row
    #[allow(clippy::too_many_arguments)]
    pub fn set(&mut self, m00: T, m01: T, m02: T,
                          m10: T, m11: T, m12: T,
                          m20: T, m21: T, m22: T) -> &mut Self {
        self.vals = [m00, m01, m02,
                     m10, m11, m12,
                     m20, m21, m22];
        self
    }

    /// Get the 2x2 matrix that remains after removing `row` and `column`
    #[must_use]
    pub fn minor(&self, row: usize, column: usize) -> Mat2<T> {
        Mat2::from_array(minor_vals(&self.vals, 3, row, column))
    }

    /// Calculate the cofactor of the entry at `row` and `column`: the signed determinant of its minor
    #[must_use]
    pub fn cofactor(&self, row: usize, column: usize) -> T {
        cofactor_sign::<T>(row, column) * self.minor(row, column).determinant()
    }

    /// Calculate the determinant, expanded along the first row
    #[must_use]
    pub fn determinant(&self) -> T {
        let v = &self.vals;
        v[0] * (v[4] * v[8] - v[5] * v[7]) -
        v[1] * (v[3] * v[8] - v[5] * v[6]) +
        v[2] * (v[3] * v[7] - v[4] * v[6])
    }

    /// Calculate the adjugate (transposed cofactor matrix), `self * self.adjugate() == self.determinant() * I`
    #[must_use]
    pub fn adjugate(&self) -> Self {
        Self { vals: core::array::from_fn(|idx| self.cofactor(idx % 3, idx / 3)) }
    }
}
