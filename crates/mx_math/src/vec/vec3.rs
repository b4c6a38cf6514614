use core::{
    fmt,
    ops::*,
};
use crate::*;
use super::generic_vec;

generic_vec!{ doc = "3D Vector"; Vec3, 3, x, y, z;
    f32v3 => f32
    f64v3 => f64
}

impl<T: Real> Vec3<T> {
    /// Extend a `Vec3` to a `Vec4`
    #[inline]
    #[must_use]
    pub fn extend(&self, w: T) -> Vec4<T> {
        Vec4 { x: self.x, y: self.y, z: self.z, w }
    }

    /// Shrink a `Vec3` to a `Vec2`
    #[inline]
    #[must_use]
    pub fn shrink(&self) -> Vec2<T> {
        Vec2 { x: self.x, y: self.y }
    }

    /// Calculate the (right-handed) cross product of 2 vectors
    #[inline]
    #[must_use]
    pub fn cross(&self, rhs: &Self) -> Self {
        Vec3 { x: self.y * rhs.z - self.z * rhs.y,
               y: self.z * rhs.x - self.x * rhs.z,
               z: self.x * rhs.y - self.y * rhs.x }
    }

    /// Rotate the vector around the x-axis through `pivot`, by `rad` radians
    pub fn rotate_x(&mut self, pivot: &Self, rad: T) -> &mut Self {
        let (sin, cos) = rad.sin_cos();
        let py = self.y - pivot.y;
        let pz = self.z - pivot.z;
        self.y = py * cos - pz * sin + pivot.y;
        self.z = py * sin + pz * cos + pivot.z;
        self
    }

    /// Rotate the vector around the y-axis through `pivot`, by `rad` radians
    pub fn rotate_y(&mut self, pivot: &Self, rad: T) -> &mut Self {
        let (sin, cos) = rad.sin_cos();
        let px = self.x - pivot.x;
        let pz = self.z - pivot.z;
        self.x = pz * sin + px * cos + pivot.x;
        self.z = pz * cos - px * sin + pivot.z;
        self
    }

    /// Rotate the vector around the z-axis through `pivot`, by `rad` radians
    pub fn rotate_z(&mut self, pivot: &Self, rad: T) -> &mut Self {
        let (sin, cos) = rad.sin_cos();
        let px = self.x - pivot.x;
        let py = self.y - pivot.y;
        self.x = px * cos - py * sin + pivot.x;
        self.y = px * sin + py * cos + pivot.y;
        self
    }
}
