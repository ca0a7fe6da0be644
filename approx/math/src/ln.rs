use crate::{Approximation, MAX_TERMS, MathError, MathResult};

/// Approximate the natural logarithm of `x` through the identity
/// `ln(x) = 2 * atanh((x - 1) / (x + 1))`, expanding `atanh(y)` as
/// `y + y^3/3 + y^5/5 + ...`.
///
/// The caller is responsible for the domain: for `x <= 0` the result is
/// meaningless. For any positive `x` the ratio `y` lies in `(-1, 1)` and the
/// series converges, quickly near `x = 1` and slowly far from it.
///
/// Summation stops when adding a term leaves the partial sum bit-for-bit
/// unchanged, or after [`MAX_TERMS`] terms. The exact comparison is
/// deliberate; it is not a tolerance test.
pub fn ln_series(x: f64) -> Approximation {
    let y = (x - 1.0) / (x + 1.0);
    let y2 = y * y;

    let mut sum = y;
    let mut term = y;
    let mut iterations = 1;
    let mut converged = false;

    for k in 1..MAX_TERMS {
        let k = k as f64;
        term = term * y2 * (2.0 * k - 1.0) / (2.0 * k + 1.0);

        let previous = sum;
        sum += term;
        iterations += 1;

        if previous == sum {
            converged = true;
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(x, iterations, converged, "Summed logarithm series");

    Approximation::new(2.0 * sum, iterations, converged)
}

/// [`ln_series`] with the domain checked: NaN and non-positive inputs are
/// rejected.
pub fn checked_ln_series(x: f64) -> MathResult<Approximation> {
    if x.is_nan() {
        return Err(MathError::NotANumber);
    }

    if x <= 0.0 {
        return Err(MathError::non_positive_logarithm(x));
    }

    Ok(ln_series(x))
}

// ----------------------------------- tests -----------------------------------
