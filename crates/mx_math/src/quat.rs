use core::fmt;
use crate::*;

/// Quaternion, stored as `[i, j, k, r]`.
///
/// Only construction and component access are provided, there is no quaternion algebra.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quat<T: Real> {
    vals : [T; 4],
}

impl<T: Real> Quat<T> {
    /// Create a new quaternion from its real part `r` and imaginary parts `i`, `j` and `k`
    #[inline]
    #[must_use]
    pub fn new(r: T, i: T, j: T, k: T) -> Self {
        Self { vals: [i, j, k, r] }
    }

    /// Create the identity quaternion
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Overwrite all components
    pub fn set(&mut self, r: T, i: T, j: T, k: T) -> &mut Self {
        self.vals = [i, j, k, r];
        self
    }

    /// Reset the quaternion to the identity quaternion
    pub fn set_identity(&mut self) -> &mut Self {
        self.set(T::one(), T::zero(), T::zero(), T::zero())
    }

    #[inline(always)]
    #[must_use]
    pub fn r(&self) -> T { self.vals[3] }
    #[inline(always)]
    #[must_use]
    pub fn i(&self) -> T { self.vals[0] }
    #[inline(always)]
    #[must_use]
    pub fn j(&self) -> T { self.vals[1] }
    #[inline(always)]
    #[must_use]
    pub fn k(&self) -> T { self.vals[2] }

    /// Get a component
    #[inline]
    #[must_use]
    pub fn get(&self, comp: QuatComponent) -> T {
        self.vals[comp.index()]
    }

    /// Set a component
    #[inline]
    pub fn set_component(&mut self, comp: QuatComponent, val: T) -> &mut Self {
        self.vals[comp.index()] = val;
        self
    }

    /// Get a component by its name (`"r"`, `"i"`, `"j"` or `"k"`)
    pub fn get_by_name(&self, name: &str) -> MathResult<T> {
        Ok(self.get(name.parse()?))
    }

    /// Set a component by its name (`"r"`, `"i"`, `"j"` or `"k"`)
    pub fn set_by_name(&mut self, name: &str, val: T) -> MathResult<()> {
        self.set_component(name.parse()?, val);
        Ok(())
    }
}

impl<T: Real> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quat({}, {}, {}, {})", self.i(), self.j(), self.k(), self.r())
    }
}

#[allow(non_camel_case_types)]
pub type f32quat = Quat<f32>;
#[allow(non_camel_case_types)]
pub type f64quat = Quat<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_identity() {
        let q = f32quat::default();
        assert_eq!(q, Quat::identity());
        assert_eq!(q.r(), 1.0);
        assert_eq!(q.get(QuatComponent::I), 0.0);
        assert_eq!(q.to_string(), "Quat(0, 0, 0, 1)");
    }

    #[test]
    fn test_components() {
        let mut q = f64quat::new(4.0, 1.0, 2.0, 3.0);
        assert_eq!(q.get_by_name("r"), Ok(4.0));
        assert_eq!(q.get_by_name("k"), Ok(3.0));
        assert_eq!(q.get_by_name("x"), Err(MathError::UnknownComponent("x".to_string())));
        assert_eq!(q.to_string(), "Quat(1, 2, 3, 4)");

        assert_eq!(q.set_by_name("j", 5.0), Ok(()));
        assert!(q.set_by_name("w", 5.0).is_err());
        assert_eq!(q.j(), 5.0);

        q.set_identity();
        assert_eq!(q, Quat::identity());
    }
}
