/// Maximum number of terms summed by a series before giving up on
/// convergence.
pub const MAX_TERMS: usize = 100;

/// The exponential series stops once a newly added term is smaller than this
/// in magnitude.
pub const EXP_TOLERANCE: f64 = 1e-7;

/// The averaging square root stops once the two candidates are this close.
pub const SQRT_TOLERANCE: f64 = 1e-6;

/// Upper bound on averaging updates in the square root iteration.
///
/// For large inputs the spacing between adjacent doubles exceeds
/// [`SQRT_TOLERANCE`], so the gap between the candidates can never close.
pub const SQRT_MAX_UPDATES: usize = 2048;

/// Returned by the [`compat`](crate::compat) functions on a domain error.
pub const SENTINEL: f64 = -1.0;
