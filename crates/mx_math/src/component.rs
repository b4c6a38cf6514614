use core::{fmt, str::FromStr};
use crate::{MathError, MathResult};

/// Vector component selector
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Component {
    X,
    Y,
    Z,
    W,
}

impl Component {
    /// Position of the component in the vector's storage
    #[inline(always)]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Component::X => 0,
            Component::Y => 1,
            Component::Z => 2,
            Component::W => 3,
        }
    }

    /// Name of the component, as accepted by [`Component::from_str`]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Component::X => "x",
            Component::Y => "y",
            Component::Z => "z",
            Component::W => "w",
        }
    }
}

impl FromStr for Component {
    type Err = MathError;

    fn from_str(s: &str) -> MathResult<Self> {
        match s {
            "x" => Ok(Component::X),
            "y" => Ok(Component::Y),
            "z" => Ok(Component::Z),
            "w" => Ok(Component::W),
            _ => Err(unknown_component(s)),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quaternion component selector, `r` is the real part
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum QuatComponent {
    I,
    J,
    K,
    R,
}

impl QuatComponent {
    /// Position of the component in the quaternion's storage, the imaginary parts come first
    #[inline(always)]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            QuatComponent::I => 0,
            QuatComponent::J => 1,
            QuatComponent::K => 2,
            QuatComponent::R => 3,
        }
    }

    /// Name of the component, as accepted by [`QuatComponent::from_str`]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            QuatComponent::I => "i",
            QuatComponent::J => "j",
            QuatComponent::K => "k",
            QuatComponent::R => "r",
        }
    }
}

impl FromStr for QuatComponent {
    type Err = MathError;

    fn from_str(s: &str) -> MathResult<Self> {
        match s {
            "i" => Ok(QuatComponent::I),
            "j" => Ok(QuatComponent::J),
            "k" => Ok(QuatComponent::K),
            "r" => Ok(QuatComponent::R),
            _ => Err(unknown_component(s)),
        }
    }
}

impl fmt::Display for QuatComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn unknown_component(name: &str) -> MathError {
    log::debug!("rejected unknown component `{name}`");
    MathError::UnknownComponent(name.to_string())
}
