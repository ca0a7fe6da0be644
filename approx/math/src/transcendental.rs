use crate::{
    MathError, MathResult, SplitExponent, checked_bracketed_sqrt, checked_ln_series, exp_series,
    repeated_product,
};

/// Series-based transcendental functions that report domain errors instead
/// of returning a sentinel.
pub trait Transcendental: Sized + Copy {
    fn checked_ln(self) -> MathResult<Self>;

    fn approx_exp(self) -> Self;

    fn checked_sqrt(self) -> MathResult<Self>;

    /// Raise `self` to a real `exponent`.
    ///
    /// Integral exponents are computed by repeated multiplication. Otherwise
    /// the exponent is split as `whole + fraction` and the result is
    /// `self^whole * exp(fraction * ln(self))`, which requires `self > 0`.
    fn checked_pow_decimal(self, exponent: Self) -> MathResult<Self>;

    #[inline]
    fn checked_ln_assign(&mut self) -> MathResult<()> {
        *self = self.checked_ln()?;
        Ok(())
    }

    #[inline]
    fn checked_sqrt_assign(&mut self) -> MathResult<()> {
        *self = self.checked_sqrt()?;
        Ok(())
    }

    #[inline]
    fn checked_pow_decimal_assign(&mut self, exponent: Self) -> MathResult<()> {
        *self = self.checked_pow_decimal(exponent)?;
        Ok(())
    }
}

impl Transcendental for f64 {
    fn checked_ln(self) -> MathResult<Self> {
        checked_ln_series(self).map(|approx| approx.value)
    }

    fn approx_exp(self) -> Self {
        exp_series(self).value
    }

    fn checked_sqrt(self) -> MathResult<Self> {
        checked_bracketed_sqrt(self).map(|approx| approx.value)
    }

    fn checked_pow_decimal(self, exponent: Self) -> MathResult<Self> {
        if exponent.is_nan() {
            return Err(MathError::NotANumber);
        }

        // Holds for every base, zero and NaN included.
        if exponent == 0.0 {
            return Ok(1.0);
        }

        if self.is_nan() {
            return Err(MathError::NotANumber);
        }

        // The whole part is used as a native loop counter.
        if exponent.abs() > i32::MAX as f64 {
            return Err(MathError::exponent_out_of_range(exponent));
        }

        if exponent < 0.0 {
            // Errors must name the exponent the caller passed, not its negation.
            let power = self
                .checked_pow_decimal(-exponent)
                .map_err(|err| match err {
                    MathError::NonPositiveBase { .. } => {
                        MathError::non_positive_base(self, exponent)
                    },
                    err => err,
                })?;

            // A non-zero base whose power underflows yields `inf`, the same
            // as a positive exponent that overflows.
            if self == 0.0 {
                return Err(MathError::division_by_zero(self, exponent));
            }

            return Ok(1.0 / power);
        }

        let split = SplitExponent::new(exponent);
        let whole = repeated_product(self, split.whole);

        if split.is_integral() {
            return Ok(whole);
        }

        if self <= 0.0 {
            return Err(MathError::non_positive_base(self, exponent));
        }

        let fraction = (split.fraction * self.checked_ln()?).approx_exp();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            base = self,
            exponent,
            whole,
            fraction,
            "Split fractional power"
        );

        Ok(whole * fraction)
    }
}

// ----------------------------------- tests -----------------------------------
