//! Free functions with the legacy sentinel contract: a domain error is
//! reported by returning [`SENTINEL`] (`-1`) and nothing else.
//!
//! Callers that feed the result into further arithmetic without checking
//! for the sentinel get silently wrong answers. New code should prefer
//! [`Transcendental`](crate::Transcendental).

use crate::{SENTINEL, SplitExponent, exp_series, legacy_sqrt, ln_series, repeated_product};

/// Natural logarithm; [`SENTINEL`] for `x <= 0`.
pub fn ln(x: f64) -> f64 {
    if x <= 0.0 {
        return SENTINEL;
    }

    ln_series(x).value
}

/// Exponential. Total.
pub fn exp(x: f64) -> f64 {
    exp_series(x).value
}

/// Square root by averaging; [`SENTINEL`] for `n < 0`.
///
/// Inputs in `[0, 1)` are returned unchanged, see [`legacy_sqrt`].
pub fn sqrt(n: f64) -> f64 {
    if n < 0.0 {
        return SENTINEL;
    }

    legacy_sqrt(n).value
}

/// Raise `base` to a real `exponent`.
///
/// Degenerate inputs follow IEEE semantics: `0` to a negative power is
/// `+inf`. A fractional power of a non-positive base is NOT detected: the
/// logarithm returns the sentinel and the result is `base^whole * e^(-fraction)`,
/// which is meaningless.
pub fn pow_decimal(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        return 1.0;
    }

    if exponent < 0.0 {
        return 1.0 / pow_decimal(base, -exponent);
    }

    let split = SplitExponent::new(exponent);
    let whole = repeated_product(base, split.whole);

    if split.is_integral() {
        return whole;
    }

    whole * exp(split.fraction * ln(base))
}

// ----------------------------------- tests -----------------------------------
