#![allow(dead_code)]

mod period;
#[cfg(feature = "serde")]
mod serialize;
mod time;

/// A type alias we use for tests.
///
/// Most constructors in this crate are fallible, and `?` keeps the tests
/// readable.
type Result = std::result::Result<(), clockspan::Error>;
