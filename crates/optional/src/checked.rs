//! Nullable forms of the [`Optional`] operations.
//!
//! Rust values and closures cannot be null, so the plain methods never fail on
//! that account. Callers bridging from a nullable world pass values and callables
//! as `Option<_>` here instead. A missing callable is rejected up front, on both
//! variants, before anything runs. A callable that must hand back an optional
//! instance but yields `None` is rejected as well.

use crate::error::OptionalError;
use crate::optional::Optional;

impl<T> Optional<T> {
    /// Like [`Optional::of`], but `None` is a null rejection rather than an
    /// absent optional.
    pub fn try_of(value: Option<T>) -> Result<Self, OptionalError> {
        match value {
            Some(value) => Ok(Optional::Present(value)),
            None => Err(reject!("value")),
        }
    }

    /// Maps through a mapper that may yield no value. A `None` result becomes
    /// `Optional::Absent`.
    pub fn map_nullable<U, F: FnOnce(T) -> Option<U>>(self, mapper: F) -> Optional<U> {
        match self {
            Optional::Present(value) => Optional::of_nullable(mapper(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn try_filter<P>(self, predicate: Option<P>) -> Result<Self, OptionalError>
    where
        P: FnOnce(&T) -> bool,
    {
        let predicate = predicate.ok_or_else(|| reject!("predicate"))?;
        Ok(self.filter(predicate))
    }

    pub fn try_map<U, F>(self, mapper: Option<F>) -> Result<Optional<U>, OptionalError>
    where
        F: FnOnce(T) -> Option<U>,
    {
        let mapper = mapper.ok_or_else(|| reject!("mapper"))?;
        Ok(self.map_nullable(mapper))
    }

    /// Flattens the mapper's optional. A mapper yielding `None` instead of an
    /// optional instance is rejected.
    pub fn try_flat_map<U, F>(self, mapper: Option<F>) -> Result<Optional<U>, OptionalError>
    where
        F: FnOnce(T) -> Option<Optional<U>>,
    {
        let mapper = mapper.ok_or_else(|| reject!("mapper"))?;
        match self {
            Optional::Present(value) => mapper(value).ok_or_else(|| reject!("mapper result")),
            Optional::Absent => Ok(Optional::Absent),
        }
    }

    pub fn try_or<S>(self, supplier: Option<S>) -> Result<Self, OptionalError>
    where
        S: FnOnce() -> Option<Optional<T>>,
    {
        let supplier = supplier.ok_or_else(|| reject!("supplier"))?;
        match self {
            Optional::Present(value) => Ok(Optional::Present(value)),
            Optional::Absent => supplier().ok_or_else(|| reject!("supplier result")),
        }
    }

    pub fn try_or_else_get<S>(self, supplier: Option<S>) -> Result<T, OptionalError>
    where
        S: FnOnce() -> T,
    {
        let supplier = supplier.ok_or_else(|| reject!("supplier"))?;
        Ok(self.or_else_get(supplier))
    }

    /// Returns the value, or the supplier's error when absent. The supplier's
    /// error comes back unchanged; a missing supplier is converted into `E`.
    pub fn try_or_else_throw<E, S>(self, exception_supplier: Option<S>) -> Result<T, E>
    where
        S: FnOnce() -> E,
        E: From<OptionalError>,
    {
        let exception_supplier =
            exception_supplier.ok_or_else(|| E::from(reject!("exception supplier")))?;
        self.or_else_throw_with(exception_supplier)
    }
}
