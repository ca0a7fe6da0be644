use {std::fmt::Display, thiserror::Error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("input is not a number")]
    NotANumber,

    #[error("logarithm of a non-positive number: ln({x})")]
    NonPositiveLogarithm { x: String },

    #[error("square root of a negative number: sqrt({n})")]
    NegativeSqrt { n: String },

    #[error("fractional power of a non-positive base: {base} ^ {exponent}")]
    NonPositiveBase { base: String, exponent: String },

    #[error("exponent doesn't fit in the iteration counter: {exponent}")]
    ExponentOutOfRange { exponent: String },

    #[error("division by zero: {base} ^ {exponent}")]
    DivisionByZero { base: String, exponent: String },
}

impl MathError {
    pub fn non_positive_logarithm<T>(x: T) -> Self
    where
        T: Display,
    {
        Self::NonPositiveLogarithm { x: x.to_string() }
    }

    pub fn negative_sqrt<T>(n: T) -> Self
    where
        T: Display,
    {
        Self::NegativeSqrt { n: n.to_string() }
    }

    pub fn non_positive_base<B, E>(base: B, exponent: E) -> Self
    where
        B: Display,
        E: Display,
    {
        Self::NonPositiveBase {
            base: base.to_string(),
            exponent: exponent.to_string(),
        }
    }

    pub fn exponent_out_of_range<T>(exponent: T) -> Self
    where
        T: Display,
    {
        Self::ExponentOutOfRange {
            exponent: exponent.to_string(),
        }
    }

    pub fn division_by_zero<B, E>(base: B, exponent: E) -> Self
    where
        B: Display,
        E: Display,
    {
        Self::DivisionByZero {
            base: base.to_string(),
            exponent: exponent.to_string(),
        }
    }
}

pub type MathResult<T> = core::result::Result<T, MathError>;
