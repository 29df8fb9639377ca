use thiserror::Error;

/// Error raised by the operations of [`Optional`](crate::Optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// A required value or callable was missing, or a callable produced a bare
    /// "no value" where an instance was required.
    #[error("null {what} rejected")]
    NullRejected { what: &'static str },
    /// The optional was unwrapped while holding no value.
    #[error("No value present")]
    NoSuchElement,
}

impl OptionalError {
    pub fn is_null_rejected(&self) -> bool {
        matches!(self, OptionalError::NullRejected { .. })
    }

    pub fn is_no_such_element(&self) -> bool {
        matches!(self, OptionalError::NoSuchElement)
    }
}
