use core::{
    fmt,
    ops::*,
};
use crate::*;
use super::generic_vec;

generic_vec!{ doc = "2D Vector"; Vec2, 2, x, y;
    f32v2 => f32
    f64v2 => f64
}

impl<T: Real> Vec2<T> {
    /// Extend a `Vec2` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn extend(&self, z: T) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z }
    }

    /// Calculate the cross product of 2 vectors, as a `Vec3` on the z-axis.
    ///
    /// The z-component of the result is the 2D cross product `x1 * y2 - y1 * x2`.
    #[inline]
    #[must_use]
    pub fn cross(&self, rhs: &Self) -> Vec3<T> {
        Vec3 { x: T::zero(), y: T::zero(), z: self.x * rhs.y - self.y * rhs.x }
    }

    /// Get the vector rotated counter-clockwise around `pivot` by `rad` radians
    #[must_use]
    pub fn rotate(&self, pivot: &Self, rad: T) -> Self {
        let (sin, cos) = rad.sin_cos();
        let px = self.x - pivot.x;
        let py = self.y - pivot.y;
        Self {
            x: px * cos - py * sin + pivot.x,
            y: px * sin + py * cos + pivot.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use crate::*;

    #[test]
    fn test_cross_extend() {
        let v0 = Vec2::new(2f32, -3f32);
        let v1 = Vec2::new(4f32, 5f32);

        assert_eq!(v0.cross(&v1), Vec3::new(0f32, 0f32, 22f32));
        assert_eq!(v0.extend(1f32), Vec3::new(2f32, -3f32, 1f32));
    }

    #[test]
    fn test_lerp() {
        let a = f64v2::new(2.0, 3.0);
        let b = f64v2::new(4.0, 5.0);

        assert_eq!(a.lerp(&b, 0.5), Vec2::new(3.0, 4.0));
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_rotate() {
        let v = f64v2::new(1.0, 0.0);
        let origin = f64v2::zero();

        let r = v.rotate(&origin, f64::HALF_PI);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);

        let pivot = f64v2::new(1.0, 1.0);
        let r = f64v2::new(2.0, 1.0).rotate(&pivot, f64::PI);
        assert!(r.equals(&Vec2::new(0.0, 1.0)));

        // Receiver is left as is
        assert_eq!(v, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_in_place_ops() {
        let mut v = f64v2::new(1.0, 2.0);
        v.add(&Vec2::new(3.0, 4.0)).scale(2.0);
        assert_eq!(v, Vec2::new(8.0, 12.0));

        v.subtract(&Vec2::new(8.0, 10.0));
        assert_eq!(v, Vec2::new(0.0, 2.0));

        v.negate();
        assert_eq!(v, Vec2::new(0.0, -2.0));

        let mut copy = f64v2::zero();
        copy.copy_from(&v);
        v.set(5.0, 6.0);
        assert_eq!(copy, Vec2::new(0.0, -2.0));
        assert_eq!(v, Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_inverse() {
        let mut v = f64v2::new(2.0, -4.0);
        assert!(v.inverse().is_ok());
        assert_eq!(v, Vec2::new(0.5, -0.25));

        let mut v = f64v2::new(2.0, 0.0);
        assert_eq!(v.inverse().err(), Some(MathError::DivideByZero));
        assert_eq!(v, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_normalize_tiny() {
        let mut v = f32v2::new(1e-23, 0.0);
        assert!(v.normalize().is_ok());
        assert_eq!(v, Vec2::new(1.0, 0.0));

        let mut v = f32v2::new(f32::from_bits(1), -f32::from_bits(1));
        assert!(v.normalize().is_ok());
        assert_relative_eq!(v.x, f32::sqrt(0.5));
        assert_relative_eq!(v.y, -f32::sqrt(0.5));
        assert_relative_eq!(v.length(), 1.0);

        let mut zero = f32v2::zero();
        assert_eq!(zero.normalize().err(), Some(MathError::DivideByZero));
    }

    #[test]
    fn test_components() {
        let mut v = f32v2::new(1.0, 2.0);
        assert_eq!(v.get(Component::X), Ok(1.0));
        assert_eq!(v.get_by_name("y"), Ok(2.0));
        assert_eq!(v.get(Component::Z), Err(MathError::UnknownComponent("z".to_string())));
        assert_eq!(v.get_by_name("q"), Err(MathError::UnknownComponent("q".to_string())));

        assert_eq!(v.set_by_name("x", 7.0), Ok(()));
        assert_eq!(v.set_component(Component::W, 7.0), Err(MathError::UnknownComponent("w".to_string())));
        assert_eq!(v, Vec2::new(7.0, 2.0));
        assert_eq!(v[1], 2.0);
        assert_eq!(v[Component::X], 7.0);
    }

    #[test]
    fn test_angle() {
        let a = f64v2::new(1.0, 0.0);
        let b = f64v2::new(0.0, 2.0);
        assert_relative_eq!(a.angle(&b), f64::HALF_PI);
        assert_relative_eq!(a.angle(&Vec2::new(-3.0, 0.0)), f64::PI);
        assert_eq!(a.angle(&a), 0.0);
        assert_relative_eq!(a.angle(&f64v2::zero()), f64::HALF_PI);
    }

    #[test]
    fn test_display() {
        assert_eq!(f32v2::new(1.0, 2.0).to_string(), "Vec2(1, 2)");
        assert_eq!(f64v2::new(-0.5, 3.0).to_string(), "Vec2(-0.5, 3)");
    }
}
