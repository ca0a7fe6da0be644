use crate::{Approximation, EXP_TOLERANCE, MAX_TERMS};

/// Approximate `e^x` with the Taylor series `sum(x^i / i!)`, building each
/// term from the previous one.
///
/// Summation stops once a newly added term is smaller than [`EXP_TOLERANCE`]
/// in magnitude, or after [`MAX_TERMS`] terms. For large `|x|` the cap is hit
/// before the terms become small and the result is inaccurate.
pub fn exp_series(x: f64) -> Approximation {
    let mut sum = 1.0;
    let mut term = 1.0;
    let mut iterations = 1;
    let mut converged = false;

    for i in 1..MAX_TERMS {
        term *= x / i as f64;
        sum += term;
        iterations += 1;

        if term.abs() < EXP_TOLERANCE {
            converged = true;
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(x, iterations, converged, "Summed exponential series");

    Approximation::new(sum, iterations, converged)
}

// ----------------------------------- tests -----------------------------------
