#![allow(dead_code)]

use std::cell::Cell;
use std::sync::Once;

use once_cell::sync::Lazy;
use optional::{Optional, OptionalError};

static INIT: Once = Once::new();

/// Installs the test logger once per test binary.
pub fn setup() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub static EMPTY: Lazy<Optional<String>> = Lazy::new(Optional::empty);
pub static NON_EMPTY: Lazy<Optional<String>> = Lazy::new(|| Optional::of(String::from("test")));

pub fn empty() -> Optional<String> {
    EMPTY.clone()
}

pub fn non_empty() -> Optional<String> {
    NON_EMPTY.clone()
}

/// Counts how many times a callable ran.
#[derive(Debug, Default)]
pub struct Calls(Cell<u32>);

impl Calls {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> u32 {
        self.0.get()
    }
}

/// Caller-defined error raised through `or_else_throw_with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MyError {
    Custom(u32),
    Optional(OptionalError),
}

impl From<OptionalError> for MyError {
    fn from(err: OptionalError) -> Self {
        MyError::Optional(err)
    }
}
