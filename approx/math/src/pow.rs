/// A non-negative exponent split into the part handled by repeated
/// multiplication and the part handled by `exp(fraction * ln(base))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitExponent {
    pub whole: u32,
    pub fraction: f64,
}

impl SplitExponent {
    /// Split a non-negative exponent. Exponents beyond `u32::MAX` saturate
    /// the whole part; NaN yields a zero whole part and a NaN fraction.
    pub fn new(exponent: f64) -> Self {
        let truncated = exponent.trunc();

        Self {
            whole: truncated as u32,
            fraction: exponent - truncated,
        }
    }

    pub fn is_integral(&self) -> bool {
        self.fraction == 0.0
    }
}

/// Multiply `base` by itself `count` times, starting from `1`.
pub fn repeated_product(base: f64, count: u32) -> f64 {
    (0..count).fold(1.0, |product, _| product * base)
}

// ----------------------------------- tests -----------------------------------
