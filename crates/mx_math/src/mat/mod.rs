use crate::*;

mod mat2;
pub use mat2::*;

mod mat3;
pub use mat3::*;

mod mat4;
pub use mat4::*;

/// Collect the entries of an `n x n` row-major matrix that remain after removing `row` and `column`
pub(crate) fn minor_vals<T: Real, const M: usize>(vals: &[T], n: usize, row: usize, column: usize) -> [T; M] {
    debug_assert!(row < n);
    debug_assert!(column < n);
    debug_assert_eq!((n - 1) * (n - 1), M);

    let mut res = [T::zero(); M];
    let mut idx = 0;
    for r in (0..n).filter(|r| *r != row) {
        for c in (0..n).filter(|c| *c != column) {
            res[idx] = vals[r * n + c];
            idx += 1;
        }
    }
    res
}

/// Sign of the cofactor at `row` and `column`, following the `+ - + / - + - / ...` checkerboard
#[inline(always)]
pub(crate) fn cofactor_sign<T: Real>(row: usize, column: usize) -> T {
    if (row + column) % 2 == 0 { T::one() } else { -T::one() }
}

macro_rules! generic_matrix {
    {
        $docs:meta;
        $name:ident, $n:literal, $vec:ident;
        $($alias_ty:ident => $base_ty:ty)*
    } => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub struct $name<T: Real> {
            pub(crate) vals : [T; $n * $n]
        }

        impl<T: Real> $name<T> {
            /// Create a matrix from an array, in row-major order
            #[inline(always)]
            #[must_use]
            pub fn from_array(vals: [T; $n * $n]) -> Self {
                Self { vals }
            }

            /// Get the content of the matrix as an array, in row-major order
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $n * $n] {
                self.vals
            }

            /// Get a reference to the underlying row-major array
            #[inline(always)]
            #[must_use]
            pub fn as_array(&self) -> &[T; $n * $n] {
                &self.vals
            }

            /// Get a mutable reference to the underlying row-major array
            #[inline(always)]
            #[must_use]
            pub fn as_mut_array(&mut self) -> &mut [T; $n * $n] {
                &mut self.vals
            }

            #[doc = concat!("Create an identity ", stringify!($name))]
            #[must_use]
            pub fn identity() -> Self {
                let mut vals = [T::zero(); $n * $n];
                for i in 0..$n {
                    vals[i * $n + i] = T::one();
                }
                Self { vals }
            }

            /// Reset the matrix to the identity matrix
            pub fn set_identity(&mut self) -> &mut Self {
                *self = Self::identity();
                self
            }

            /// Overwrite all entries with the entries of `other`
            pub fn copy_from(&mut self, other: &Self) -> &mut Self {
                self.vals = other.vals;
                self
            }

            /// Get a row of the matrix
            #[must_use]
            pub fn row(&self, row: usize) -> $vec<T> {
                debug_assert!(row < $n);
                $vec::from_array(core::array::from_fn(|col| self.vals[row * $n + col]))
            }

            /// Get a column of the matrix
            #[must_use]
            pub fn column(&self, column: usize) -> $vec<T> {
                debug_assert!(column < $n);
                $vec::from_array(core::array::from_fn(|row| self.vals[row * $n + column]))
            }

        //--------------------------------------------------------------

            /// Transpose the matrix
            pub fn transpose(&mut self) -> &mut Self {
                for row in 0..$n {
                    for col in (row + 1)..$n {
                        self.vals.swap(row * $n + col, col * $n + row);
                    }
                }
                self
            }

            /// Get a transposed copy of the matrix
            #[must_use]
            pub fn transposed(&self) -> Self {
                let mut res = *self;
                res.transpose();
                res
            }

            /// Add `other` to the matrix, entry by entry
            pub fn add(&mut self, other: &Self) -> &mut Self {
                for (dst, src) in self.vals.iter_mut().zip(other.vals.iter()) {
                    *dst += *src;
                }
                self
            }

            /// Subtract `other` from the matrix, entry by entry
            pub fn subtract(&mut self, other: &Self) -> &mut Self {
                for (dst, src) in self.vals.iter_mut().zip(other.vals.iter()) {
                    *dst -= *src;
                }
                self
            }

            /// Multiply the matrix by `rhs`, i.e. `self = self * rhs`
            pub fn multiply(&mut self, rhs: &Self) -> &mut Self {
                let lhs = self.vals;
                for row in 0..$n {
                    for col in 0..$n {
                        let mut sum = T::zero();
                        for k in 0..$n {
                            sum += lhs[row * $n + k] * rhs.vals[k * $n + col];
                        }
                        self.vals[row * $n + col] = sum;
                    }
                }
                self
            }

            /// Multiply every entry by `scalar`
            pub fn multiply_scalar(&mut self, scalar: T) -> &mut Self {
                for val in &mut self.vals {
                    *val *= scalar;
                }
                self
            }

            /// Scale each column of the matrix by the matching component of `scale`
            pub fn scale(&mut self, scale: &$vec<T>) -> &mut Self {
                let scale = scale.as_array();
                for row in 0..$n {
                    for col in 0..$n {
                        self.vals[row * $n + col] *= scale[col];
                    }
                }
                self
            }

            #[doc = concat!("Create a ", stringify!($name), " that scales by `scale`")]
            #[must_use]
            pub fn from_scale(scale: &$vec<T>) -> Self {
                let mut res = Self::identity();
                res.scale(scale);
                res
            }

            /// Calculate the inverse of the matrix.
            ///
            /// Returns `None` when the matrix is singular, i.e. when its determinant is exactly 0.
            #[must_use]
            pub fn invert(&self) -> Option<Self> {
                let det = self.determinant();
                if det == T::zero() {
                    log::trace!("{} has a zero determinant, no inverse exists", stringify!($name));
                    return None;
                }
                let mut res = self.adjugate();
                res.multiply_scalar(det.rcp());
                Some(res)
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Default for $name<T> {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl<T: Real> Zero for $name<T> {
            fn zero() -> Self {
                Self { vals: [T::zero(); $n * $n] }
            }
        }

        impl<T: Real> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &Self::Output {
                debug_assert!(index < $n * $n);
                &self.vals[index]
            }
        }

        impl<T: Real> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                debug_assert!(index < $n * $n);
                &mut self.vals[index]
            }
        }

        impl<T: Real> Index<(usize, usize)> for $name<T> {
            type Output = T;

            fn index(&self, index: (usize, usize)) -> &Self::Output {
                debug_assert!(index.0 < $n);
                debug_assert!(index.1 < $n);
                &self.vals[index.0 * $n + index.1]
            }
        }

        impl<T: Real> IndexMut<(usize, usize)> for $name<T> {
            fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
                debug_assert!(index.0 < $n);
                debug_assert!(index.1 < $n);
                &mut self.vals[index.0 * $n + index.1]
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Neg for $name<T> {
            type Output = Self;

            fn neg(mut self) -> Self::Output {
                self.multiply_scalar(-T::one());
                self
            }
        }

        impl<T: Real> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                $name::add(self, &rhs);
            }
        }

        impl<T: Real> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                self.subtract(&rhs);
            }
        }

        impl<T: Real> Mul for $name<T> {
            type Output = Self;

            fn mul(mut self, rhs: Self) -> Self::Output {
                self.multiply(&rhs);
                self
            }
        }

        impl<T: Real> MulAssign for $name<T> {
            fn mul_assign(&mut self, rhs: Self) {
                self.multiply(&rhs);
            }
        }

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(mut self, rhs: T) -> Self::Output {
                self.multiply_scalar(rhs);
                self
            }
        }

        impl<T: Real> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                self.multiply_scalar(rhs);
            }
        }

        impl Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            fn mul(self, rhs: $name<f32>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            fn mul(self, rhs: $name<f64>) -> Self::Output {
                rhs * self
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> ApproxEq for $name<T> {
            fn equals(&self, other: &Self) -> bool {
                self.vals.iter().zip(other.vals.iter()).all(|(a, b)| equals(*a, *b))
            }

            fn exact_equals(&self, other: &Self) -> bool {
                self.vals == other.vals
            }
        }

        impl<T: Real> From<[T; $n * $n]> for $name<T> {
            fn from(vals: [T; $n * $n]) -> Self {
                Self { vals }
            }
        }

        impl<T: Real> From<$name<T>> for [T; $n * $n] {
            fn from(mat: $name<T>) -> Self {
                mat.vals
            }
        }

        impl<T: Real> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                writeln!(f, "{}", stringify!($name))?;
                f.write_str("[")?;
                for row in 0..$n {
                    if row != 0 {
                        f.write_str("\n")?;
                    }
                    for col in 0..$n {
                        if col != 0 {
                            f.write_str(" ")?;
                        }
                        write!(f, "{}", self.vals[row * $n + col])?;
                    }
                }
                f.write_str("]")
            }
        }

        static_assertions::assert_eq_size!($name<f32>, [f32; $n * $n]);
        static_assertions::assert_eq_size!($name<f64>, [f64; $n * $n]);

        $(
            #[allow(non_camel_case_types)]
            pub type $alias_ty = $name<$base_ty>;
        )*
    };
}
pub(crate) use generic_matrix;

/// Generate named getters and setters for matrix entries
macro_rules! matrix_entries {
    {$name:ident; $($get:ident, $set:ident => $idx:literal),+ $(,)?} => {
        impl<T: Real> $name<T> {
            $(
                #[doc = concat!("Get entry `", stringify!($get), "`")]
                #[inline(always)]
                #[must_use]
                pub fn $get(&self) -> T {
                    self.vals[$idx]
                }

                #[doc = concat!("Set entry `", stringify!($get), "`")]
                #[inline(always)]
                pub fn $set(&mut self, val: T) -> &mut Self {
                    self.vals[$idx] = val;
                    self
                }
            )+
        }
    };
}
pub(crate) use matrix_entries;
