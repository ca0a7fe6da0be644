use crate::{Approximation, MathError, MathResult, SQRT_MAX_UPDATES, SQRT_TOLERANCE};

/// Approximate the square root of `n` by averaging a candidate root `x` with
/// its cofactor `y = n / x` until the two are within [`SQRT_TOLERANCE`].
///
/// The iteration starts from `x = n, y = 1`. For `0 <= n < 1` this pair is
/// already "converged" (`x - y` is negative) and `n` itself is returned. That
/// quirk is kept as is; see [`Transcendental::checked_sqrt`] for a variant
/// that starts from a pair bracketing the root.
///
/// Negative `n` is outside the domain and must be rejected by the caller.
///
/// [`Transcendental::checked_sqrt`]: crate::Transcendental::checked_sqrt
pub fn legacy_sqrt(n: f64) -> Approximation {
    average_towards_root(n, n, 1.0)
}

/// Same averaging iteration as [`legacy_sqrt`], but starting from
/// `x = max(n, 1)` so that `y <= sqrt(n) <= x` holds from the first step.
///
/// Negative `n` is outside the domain and must be rejected by the caller.
pub fn bracketed_sqrt(n: f64) -> Approximation {
    if n == 0.0 {
        return Approximation::new(0.0, 0, true);
    }

    let x = n.max(1.0);

    average_towards_root(n, x, n / x)
}

/// [`bracketed_sqrt`] with the domain checked: NaN and negative inputs are
/// rejected.
pub fn checked_bracketed_sqrt(n: f64) -> MathResult<Approximation> {
    if n.is_nan() {
        return Err(MathError::NotANumber);
    }

    if n < 0.0 {
        return Err(MathError::negative_sqrt(n));
    }

    Ok(bracketed_sqrt(n))
}

fn average_towards_root(n: f64, mut x: f64, mut y: f64) -> Approximation {
    let mut updates = 0;

    while x - y > SQRT_TOLERANCE {
        if updates == SQRT_MAX_UPDATES {
            #[cfg(feature = "tracing")]
            tracing::debug!(n, x, y, "Square root iteration hit the update cap");

            return Approximation::new(x, updates, false);
        }

        x = (x + y) / 2.0;
        y = n / x;
        updates += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(n, x, y, gap = x - y, "Averaged square root candidates");
    }

    Approximation::new(x, updates, true)
}

// ----------------------------------- tests -----------------------------------
