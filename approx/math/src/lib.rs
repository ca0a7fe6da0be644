//! Numeric approximation routines built from first principles on `f64`:
//! natural logarithm, exponential, square root, and a real-exponent power
//! composed from the other two.
//!
//! Two surfaces are exposed:
//!
//! - [`Transcendental`], implemented for `f64`, reports domain errors as
//!   [`MathError`].
//! - [`compat`], plain free functions that signal domain errors by
//!   returning the [`SENTINEL`] value `-1`.

pub mod compat;
mod consts;
mod error;
mod exp;
mod ln;
mod pow;
mod report;
mod sqrt;
#[cfg(test)]
mod test_utils;
mod transcendental;

pub use {consts::*, error::*, exp::*, ln::*, pow::*, report::*, sqrt::*, transcendental::*};
