//!
//! Growable sequence of f64 with a cursor on the current element
//!
pub mod error;
pub mod params;
pub mod prelude;
pub mod seq;
pub mod storage;

#[cfg(test)]
#[macro_use]
extern crate approx;
