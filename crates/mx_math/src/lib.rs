//! A small generic linear algebra library: vectors with 2, 3 or 4 components and 2x2, 3x3 or 4x4 matrices.
//!
//! All types are generic over a [`Real`] component type and are plain values: every instance owns its components.
//! Algebraic combinators (`add`, `scale`, `multiply`, ...) mutate the receiver in place, decompositions (`invert`, `adjugate`)
//! return a new instance. [`Clone`] (or [`Copy`]) the receiver first when the value before the mutation is still needed.
//!
//! Approximate comparisons use a tolerance that grows with the magnitude of the compared values, see [`equals`].
//!
//! [`Scalar`] is the default component type: `f32`, or `f64` when the `f64` feature is enabled.

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

mod scalar;
pub use scalar::*;

mod error;
pub use error::*;

mod component;
pub use component::*;

mod utils;

mod vec;
pub use vec::*;

mod mat;
pub use mat::*;

mod quat;
pub use quat::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "f64")] {
        /// Default component type
        pub type Scalar = f64;
    } else {
        /// Default component type
        pub type Scalar = f32;
    }
}

/// 2D vector using the default component type
pub type Vector2 = Vec2<Scalar>;
/// 3D vector using the default component type
pub type Vector3 = Vec3<Scalar>;
/// 4D vector using the default component type
pub type Vector4 = Vec4<Scalar>;
/// 2x2 matrix using the default component type
pub type Matrix2 = Mat2<Scalar>;
/// 3x3 matrix using the default component type
pub type Matrix3 = Mat3<Scalar>;
/// 4x4 matrix using the default component type
pub type Matrix4 = Mat4<Scalar>;
/// Quaternion using the default component type
pub type Quaternion = Quat<Scalar>;
