#![no_std]

#[cfg(test)]
extern crate std;

// Logging macros, must come first so the other modules see them
#[macro_use]
mod log;

pub mod error;
pub use error::OptionalError;

pub mod optional;
pub use optional::Optional;

pub mod iter;
pub use iter::{IntoIter, Iter};

pub mod checked;
