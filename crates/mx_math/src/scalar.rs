use crate::{Real, EPSILON};

/// Round a value to the nearest integer, with halves rounded away from 0 for both signs.
///
/// `round(2.5) == 3` and `round(-2.5) == -3`.
#[inline]
#[must_use]
pub fn round<T: Real>(a: T) -> T {
    if a > T::zero() {
        a.round()
    } else if a % T::from_f64(0.5) == T::zero() {
        // Exact multiples of 0.5 at or below 0: integers stay put, halves go down
        a.floor()
    } else {
        a.round()
    }
}

/// Convert degrees to radians
#[inline(always)]
#[must_use]
pub fn to_radian<T: Real>(deg: T) -> T {
    deg * T::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline(always)]
#[must_use]
pub fn to_degree<T: Real>(rad: T) -> T {
    rad * T::RAD_TO_DEG
}

/// Check if 2 values are approximately equal.
///
/// The tolerance is [`EPSILON`] for values with a magnitude up to 1, and grows with the larger magnitude beyond that:
/// `|a - b| <= EPSILON * max(1, |a|, |b|)`.
#[inline]
#[must_use]
pub fn equals<T: Real>(a: T, b: T) -> bool {
    let scale = T::one().max(a.abs()).max(b.abs());
    (a - b).abs() <= T::from_f64(EPSILON) * scale
}

/// Check if 2 values are exactly equal, without any tolerance
#[inline(always)]
#[must_use]
pub fn exact_equals<T: Real>(a: T, b: T) -> bool {
    a == b
}

/// Approximate and exact comparison, applied per component for compound types
pub trait ApproxEq {
    /// Check if every component of `self` is approximately equal to the matching component in `other`, see [`equals`]
    fn equals(&self, other: &Self) -> bool;
    /// Check if every component of `self` is exactly equal to the matching component in `other`
    fn exact_equals(&self, other: &Self) -> bool;
}

macro_rules! impl_approx_eq {
    {$($ty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                fn equals(&self, other: &Self) -> bool {
                    equals(*self, *other)
                }

                fn exact_equals(&self, other: &Self) -> bool {
                    *self == *other
                }
            }
        )*
    };
}
impl_approx_eq!{ f32, f64 }
