use thiserror::Error;

/// Errors raised by vector and component operations
///
/// A singular matrix is not an error, `invert` returns `None` for it instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A component was looked up by a name the type does not have
    #[error("unknown component `{0}`")]
    UnknownComponent(String),
    /// The operation would have divided by zero, the value was left unchanged
    #[error("divide by zero")]
    DivideByZero,
}

pub type MathResult<T> = Result<T, MathError>;

pub(crate) fn divide_by_zero(op: &str) -> MathError {
    log::debug!("`{op}` rejected, it would divide by zero");
    MathError::DivideByZero
}
