/// Trait that defines common math constants
pub trait MathConsts {
    /// Minimum value
    const MIN : Self;
    /// Maximum value
    const MAX : Self;

    /// pi
    const PI : Self;
    /// 2 * pi
    const TWO_PI : Self;
    /// pi / 2
    const HALF_PI : Self;
    /// pi / 4
    const QUARTER_PI : Self;

    /// pi / 180
    const DEG_TO_RAD : Self;
    /// 180 / pi
    const RAD_TO_DEG : Self;
}

macro_rules! impl_math_constants {
    {$($ty:ty),*} => {
        $(
            impl MathConsts for $ty {
                const MIN        : $ty = <$ty>::MIN;
                const MAX        : $ty = <$ty>::MAX;

                const PI         : $ty = 3.14159265358979323846264338327950288 as $ty;
                const TWO_PI     : $ty = 6.28318530717958647692528676655900576 as $ty;
                const HALF_PI    : $ty = 1.57079632679489661923132169163975144 as $ty;
                const QUARTER_PI : $ty = 0.785398163397448309615660845819875721 as $ty;

                // Computed in f64 before narrowing, so `180 * DEG_TO_RAD == PI` holds exactly for f64
                const DEG_TO_RAD : $ty = (<f64 as MathConsts>::PI / 180.0) as $ty;
                const RAD_TO_DEG : $ty = (180.0 / <f64 as MathConsts>::PI) as $ty;
            }
        )*
    };
}

impl_math_constants!{ f32, f64 }

/// Tolerance used by every approximate comparison in this crate, see [`crate::equals`]
pub const EPSILON : f64 = 1e-5;
