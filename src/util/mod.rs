//! A set of utility macros and helpers used throughout the crate.

#[macro_use]
pub mod number;
