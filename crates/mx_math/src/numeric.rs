use core::{
    fmt::{Debug, Display},
    ops::*,
};
use crate::MathConsts;

/// Defines a type which has a 0-value, i.e. the additive identity
pub trait Zero {
    fn zero() -> Self;
}

impl Zero for f32 {
    #[inline(always)]
    fn zero() -> Self { 0f32 }
}
impl Zero for f64 {
    #[inline(always)]
    fn zero() -> Self { 0f64 }
}

/// Defines a type which has a 1-value, i.e. the multiplicative identity
pub trait One {
    fn one() -> Self;
}

impl One for f32 {
    #[inline(always)]
    fn one() -> Self { 1f32 }
}
impl One for f64 {
    #[inline(always)]
    fn one() -> Self { 1f64 }
}

/// Defines the arithmetic every component type needs to support
pub trait NumericBase : Sized + Clone + Copy + One + Zero + PartialEq + PartialOrd + Debug + Display +
                        Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> + Rem<Output = Self> + Neg<Output = Self> +
                        AddAssign + SubAssign + MulAssign + DivAssign + RemAssign
{
    /// Get the minimum of 2 values
    fn min(self, rhs: Self) -> Self;
    /// Get the maximum of 2 values
    fn max(self, rhs: Self) -> Self;

    /// Clamp a value between 2 values
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Calculate the absolute value
    fn abs(self) -> Self;

    /// Calculate the square root of a value
    fn sqrt(self) -> Self;
    /// Calculate the reciprocal of the value
    fn rcp(self) -> Self {
        Self::one() / self
    }
}

/// Arithmatic type representing a real number
pub trait Real : NumericBase + MathConsts {
    /// Get a ceil of the value
    fn ceil(self) -> Self;
    /// Get a floor of the value
    fn floor(self) -> Self;
    /// Round the value to the nearest integer, with halves rounded away from 0
    fn round(self) -> Self;

    /// Calculate the sine of the value
    fn sin(self) -> Self;
    /// Calculate the cosine of the value
    fn cos(self) -> Self;
    /// Calculate the sine and cosine simultaniously (this may result in a faster calculation)
    fn sin_cos(self) -> (Self, Self);
    /// Calculate the arccosine of the value
    fn acos(self) -> Self;

    /// Create a real from an f32
    fn from_f32(val: f32) -> Self;
    /// Create a real from an f64
    fn from_f64(val: f64) -> Self;
}

macro_rules! impl_real {
    {$ty:ty} => {
        impl NumericBase for $ty {
            fn min(self, rhs: Self) -> Self {
                self.min(rhs)
            }

            fn max(self, rhs: Self) -> Self {
                self.max(rhs)
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn sqrt(self) -> Self {
                self.sqrt()
            }
        }

        impl Real for $ty {
            fn ceil(self) -> Self {
                self.ceil()
            }

            fn floor(self) -> Self {
                self.floor()
            }

            fn round(self) -> Self {
                self.round()
            }

            fn sin(self) -> Self {
                self.sin()
            }

            fn cos(self) -> Self {
                self.cos()
            }

            fn sin_cos(self) -> (Self, Self) {
                self.sin_cos()
            }

            fn acos(self) -> Self {
                self.acos()
            }

            fn from_f32(val: f32) -> Self {
                val as $ty
            }

            fn from_f64(val: f64) -> Self {
                val as $ty
            }
        }
    };
}
impl_real!{f32}
impl_real!{f64}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic_clamp<T: Real>(val: T, min: T, max: T) -> T {
        NumericBase::clamp(val, min, max)
    }

    #[test]
    fn test_base_ops() {
        assert_eq!(generic_clamp(2.5f32, -1.0, 1.0), 1.0);
        assert_eq!(generic_clamp(-2.5f64, -1.0, 1.0), -1.0);
        assert_eq!(generic_clamp(0.5f64, -1.0, 1.0), 0.5);

        assert_eq!(NumericBase::rcp(4f32), 0.25);
        assert_eq!(NumericBase::abs(-3f64), 3.0);
        assert_eq!(<f64 as Real>::from_f32(0.5), 0.5);
    }
}
