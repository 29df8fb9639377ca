use core::fmt;

use crate::error::OptionalError;
use crate::iter::Iter;

/// A value of type `T`, or the deliberate absence of one.
///
/// Instances are never mutated: every transformation consumes the optional and
/// hands back a new one. All absent optionals are interchangeable, whatever `T` is,
/// and hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Absent,
    Present(T),
}

impl<T> Optional<T> {
    /// The shared absent value.
    pub const EMPTY: Self = Optional::Absent;

    /// Constructs an `Optional::Absent` variant.
    pub const fn empty() -> Self {
        Optional::Absent
    }

    /// Constructs an `Optional::Present(value)` variant.
    pub const fn of(value: T) -> Self {
        Optional::Present(value)
    }

    /// Translates a Rust `Option` into the matching variant.
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }

    /// Returns true if the value is `Present`.
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns true if the value is `Absent`.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Unwraps the value, failing with [`OptionalError::NoSuchElement`] when absent.
    pub fn get(self) -> Result<T, OptionalError> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(absent!("get")),
        }
    }

    pub fn or_else(self, other: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => other,
        }
    }

    /// Returns the value, or the supplier's result when absent. The supplier only
    /// runs on the absent path.
    pub fn or_else_get<S: FnOnce() -> T>(self, supplier: S) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => supplier(),
        }
    }

    /// Same as [`Optional::get`].
    pub fn or_else_throw(self) -> Result<T, OptionalError> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(absent!("or_else_throw")),
        }
    }

    /// Returns the value, or the error built by `exception_supplier` when absent.
    /// The error is handed back untouched.
    pub fn or_else_throw_with<E, S: FnOnce() -> E>(self, exception_supplier: S) -> Result<T, E> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(exception_supplier()),
        }
    }

    /// Unwraps the value or panics with `msg`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => panic!("{}: {}", msg, OptionalError::NoSuchElement),
        }
    }

    pub fn if_present<A: FnOnce(&T)>(&self, action: A) {
        if let Optional::Present(value) = self {
            action(value);
        }
    }

    /// Runs exactly one of `action` or `empty_action`.
    pub fn if_present_or_else<A, E>(&self, action: A, empty_action: E)
    where
        A: FnOnce(&T),
        E: FnOnce(),
    {
        match self {
            Optional::Present(value) => action(value),
            Optional::Absent => empty_action(),
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        match self {
            Optional::Present(value) => {
                if predicate(&value) {
                    Optional::Present(value)
                } else {
                    Optional::Absent
                }
            }
            Optional::Absent => Optional::Absent,
        }
    }

    /// Maps `Optional<T>` to `Optional<U>` by applying `mapper` to the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, mapper: F) -> Optional<U> {
        match self {
            Optional::Present(value) => Optional::Present(mapper(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Applies `mapper` and returns its optional directly, flattening one level.
    pub fn flat_map<U, F: FnOnce(T) -> Optional<U>>(self, mapper: F) -> Optional<U> {
        match self {
            Optional::Present(value) => mapper(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Returns `self` when present, otherwise the optional built by `supplier`.
    pub fn or<S: FnOnce() -> Optional<T>>(self, supplier: S) -> Self {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => supplier(),
        }
    }

    /// Lazy sequence over the value: zero elements when absent, one when present.
    /// Each call starts a fresh sequence.
    pub fn stream(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into_option())
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    /// Widens an optional of a convertible type, e.g. `Optional<&str>` into
    /// `Optional<String>`.
    pub fn convert<U: Into<T>>(other: Optional<U>) -> Self {
        other.map(Into::into)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "Optional[{}]", value),
            Optional::Absent => write!(f, "Optional.empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{DefaultHasher, Hash, Hasher};
    use std::string::{String, ToString};

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn display_renders_both_variants() {
        assert_eq!(Optional::<String>::empty().to_string(), "Optional.empty");
        assert_eq!(Optional::of("x").to_string(), "Optional[x]");
        assert_eq!(Optional::of(42).to_string(), "Optional[42]");
        assert_eq!(Optional::of(Optional::of(1)).to_string(), "Optional[Optional[1]]");
    }

    #[test]
    fn absent_hash_ignores_declared_type() {
        assert_eq!(
            hash_of(&Optional::<String>::empty()),
            hash_of(&Optional::<u32>::empty())
        );
        assert_eq!(hash_of(&Optional::<u8>::EMPTY), hash_of(&Optional::<u8>::default()));
    }

    #[test]
    fn equal_present_values_hash_equally() {
        let a = Optional::of(String::from("test"));
        let b = Optional::of("test".to_string());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, Optional::of(String::from("other")));
        assert_ne!(a, Optional::empty());
    }
}
