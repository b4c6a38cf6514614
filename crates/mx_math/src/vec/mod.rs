mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;

mod vec4;
pub use vec4::*;

macro_rules! generic_vec {
    {
        $docs:meta;
        $name:ident,
        $elem_cnt:literal,
        $($comp:ident),+;
        $($alias_ty:ident => $base_ty:ty)*
    } => {
        #[$docs]
        #[repr(C)]
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub struct $name<T: Copy> {
            $(pub $comp: T,)+
        }

        impl<T: Real> $name<T> {
            /// Create a new vector
            #[inline(always)]
            #[must_use]
            pub fn new($($comp: T),+) -> Self {
                Self{ $($comp),+ }
            }

            /// Create a vector with all components set to `val`
            #[inline(always)]
            #[must_use]
            pub fn splat(val: T) -> Self {
                Self{ $($comp: val),+ }
            }

            /// Overwrite all components
            #[inline]
            pub fn set(&mut self, $($comp: T),+) -> &mut Self {
                $(self.$comp = $comp;)+
                self
            }

            /// Overwrite all components with the components of `other`
            #[inline]
            pub fn copy_from(&mut self, other: &Self) -> &mut Self {
                *self = *other;
                self
            }

            /// Create a vector from an array
            #[inline(always)]
            #[must_use]
            pub fn from_array(arr: [T; $elem_cnt]) -> Self {
                let [$($comp),+] = arr;
                Self{ $($comp),+ }
            }

            /// Get the content of the vector as an array
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $elem_cnt] {
                [$(self.$comp),+]
            }

            /// Interpret a reference to a vector as a reference to an array
            #[inline(always)]
            #[must_use]
            pub fn as_array(&self) -> &[T; $elem_cnt] {
                // `repr(C)` with only `T` fields, the size is checked by `assert_eq_size!`
                unsafe { &*(self as *const Self as *const [T; $elem_cnt]) }
            }

            /// Interpret a mutable reference to a vector as a mutable reference to an array
            #[inline(always)]
            #[must_use]
            pub fn as_mut_array(&mut self) -> &mut [T; $elem_cnt] {
                unsafe { &mut *(self as *mut Self as *mut [T; $elem_cnt]) }
            }

        //--------------------------------------------------------------

            /// Get a component, fails if the vector has no such component
            pub fn get(&self, comp: Component) -> MathResult<T> {
                self.as_array().get(comp.index()).copied().ok_or_else(|| $crate::component::unknown_component(comp.name()))
            }

            /// Set a component, fails if the vector has no such component
            pub fn set_component(&mut self, comp: Component, val: T) -> MathResult<()> {
                match self.as_mut_array().get_mut(comp.index()) {
                    Some(dst) => {
                        *dst = val;
                        Ok(())
                    },
                    None => Err($crate::component::unknown_component(comp.name())),
                }
            }

            /// Get a component by its name (`"x"`, `"y"`, ...)
            pub fn get_by_name(&self, name: &str) -> MathResult<T> {
                self.get(name.parse()?)
            }

            /// Set a component by its name (`"x"`, `"y"`, ...)
            pub fn set_by_name(&mut self, name: &str, val: T) -> MathResult<()> {
                self.set_component(name.parse()?, val)
            }

        //--------------------------------------------------------------

            /// Add `other` to the vector
            #[inline]
            pub fn add(&mut self, other: &Self) -> &mut Self {
                $(self.$comp += other.$comp;)+
                self
            }

            /// Subtract `other` from the vector
            #[inline]
            pub fn subtract(&mut self, other: &Self) -> &mut Self {
                $(self.$comp -= other.$comp;)+
                self
            }

            /// Multiply every component by `scale`
            #[inline]
            pub fn scale(&mut self, scale: T) -> &mut Self {
                $(self.$comp *= scale;)+
                self
            }

            /// Flip the sign of every component
            #[inline]
            pub fn negate(&mut self) -> &mut Self {
                self.scale(-T::one())
            }

            /// Replace every component by its reciprocal.
            ///
            /// Fails with [`MathError::DivideByZero`] if any component is 0, the vector is left untouched in that case.
            pub fn inverse(&mut self) -> MathResult<&mut Self> {
                if self.as_array().iter().any(|val| *val == T::zero()) {
                    return Err($crate::error::divide_by_zero(concat!(stringify!($name), "::inverse")));
                }
                $(self.$comp = self.$comp.rcp();)+
                Ok(self)
            }

            /// Scale the vector to a length of 1.
            ///
            /// Fails with [`MathError::DivideByZero`] for a zero-length vector, the vector is left untouched in that case.
            /// Very large and very small vectors are normalized too, the components are brought to a magnitude of at most 1
            /// before the length is taken, so the squares neither overflow nor underflow.
            pub fn normalize(&mut self) -> MathResult<&mut Self> {
                let max_abs = T::zero()$(.max(self.$comp.abs()))+;
                if max_abs == T::zero() {
                    return Err($crate::error::divide_by_zero(concat!(stringify!($name), "::normalize")));
                }
                $(self.$comp /= max_abs;)+
                // The largest component is now +-1, so the length is in [1, sqrt(N)]
                let len = self.length();
                Ok(self.scale(len.rcp()))
            }

            /// Round every component up
            pub fn ceil(&mut self) -> &mut Self {
                $(self.$comp = self.$comp.ceil();)+
                self
            }

            /// Round every component down
            pub fn floor(&mut self) -> &mut Self {
                $(self.$comp = self.$comp.floor();)+
                self
            }

            /// Round every component, see [`crate::round`]
            pub fn round(&mut self) -> &mut Self {
                $(self.$comp = round(self.$comp);)+
                self
            }

        //--------------------------------------------------------------

            /// Calculate the dot product of 2 vectors
            #[inline]
            #[must_use]
            pub fn dot(&self, other: &Self) -> T {
                $crate::utils::strip_plus!{ $(+ self.$comp * other.$comp)+ }
            }

            /// Calculate the squared length of the vector
            #[inline]
            #[must_use]
            pub fn squared_length(&self) -> T {
                self.dot(self)
            }

            /// Calculate the length of the vector
            #[inline]
            #[must_use]
            pub fn length(&self) -> T {
                self.squared_length().sqrt()
            }

            /// Calculate the squared distance between 2 vectors
            #[inline]
            #[must_use]
            pub fn squared_distance(&self, other: &Self) -> T {
                $crate::utils::strip_plus!{ $(+ (other.$comp - self.$comp) * (other.$comp - self.$comp))+ }
            }

            /// Calculate the distance between 2 vectors
            #[inline]
            #[must_use]
            pub fn distance(&self, other: &Self) -> T {
                self.squared_distance(other).sqrt()
            }

            /// Linearly interpolate from the vector to `other`, `t == 0` gives `self` and `t == 1` gives `other`
            #[inline]
            #[must_use]
            pub fn lerp(&self, other: &Self, t: T) -> Self {
                Self{ $($comp: self.$comp + (other.$comp - self.$comp) * t),+ }
            }

            /// Calculate the angle between 2 vectors, in radians.
            ///
            /// If either vector has a length of 0, the angle is a right angle.
            #[must_use]
            pub fn angle(&self, other: &Self) -> T {
                let mag = self.squared_length() * other.squared_length();
                let cosine = if mag == T::zero() { T::zero() } else { self.dot(other) / mag.sqrt() };
                cosine.clamp(-T::one(), T::one()).acos()
            }
        }

        impl<T: Real> Default for $name<T> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<T: Real> Zero for $name<T> {
            fn zero() -> Self {
                Self::splat(T::zero())
            }
        }

        impl<T: Real> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                &self.as_array()[index]
            }
        }

        impl<T: Real> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.as_mut_array()[index]
            }
        }

        impl<T: Real> Index<Component> for $name<T> {
            type Output = T;

            /// Panics if the vector has no such component, use [`Self::get`] for a fallible lookup
            fn index(&self, comp: Component) -> &T {
                &self.as_array()[comp.index()]
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

        impl<T: Real> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                self.scale(rhs);
            }
        }

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(mut self, rhs: T) -> Self {
                self.scale(rhs);
                self
            }
        }

        impl<T: Real> Neg for $name<T> {
            type Output = Self;

            fn neg(mut self) -> Self {
                self.negate();
                self
            }
        }

        impl<T: Real> ApproxEq for $name<T> {
            fn equals(&self, other: &Self) -> bool {
                $(equals(self.$comp, other.$comp))&&+
            }

            fn exact_equals(&self, other: &Self) -> bool {
                $(self.$comp == other.$comp)&&+
            }
        }

        impl<T: Real> From<[T; $elem_cnt]> for $name<T> {
            fn from(arr: [T; $elem_cnt]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Real> From<$name<T>> for [T; $elem_cnt] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: Real> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), "("))?;
                for (idx, val) in self.as_array().iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{val}")?;
                }
                f.write_str(")")
            }
        }

        impl Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            fn mul(self, rhs: $name<f32>) -> $name<f32> {
                rhs * self
            }
        }

        impl Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            fn mul(self, rhs: $name<f64>) -> $name<f64> {
                rhs * self
            }
        }

        static_assertions::assert_eq_size!($name<f32>, [f32; $elem_cnt]);
        static_assertions::assert_eq_size!($name<f64>, [f64; $elem_cnt]);

        $(
            #[allow(non_camel_case_types)]
            pub type $alias_ty = $name<$base_ty>;
        )*
    };
}
pub(crate) use generic_vec;
