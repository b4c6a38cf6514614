use core::{
    fmt,
    ops::*,
};
use crate::*;
use super::generic_vec;

generic_vec!{ doc = "4D Vector"; Vec4, 4, x, y, z, w;
    f32v4 => f32
    f64v4 => f64
}

impl<T: Real> Vec4<T> {
    /// Shrink a `Vec4` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn shrink(&self) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }
}
