use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// The outcome of one iterative approximation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Approximation {
    /// The approximated value.
    pub value: f64,
    /// Series terms summed, or averaging updates performed.
    pub iterations: usize,
    /// Whether the stopping rule fired before the iteration cap.
    pub converged: bool,
}

impl Approximation {
    pub const fn new(value: f64, iterations: usize, converged: bool) -> Self {
        Self {
            value,
            iterations,
            converged,
        }
    }
}

impl fmt::Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} iterations", self.value, self.iterations)?;

        if !self.converged {
            f.write_str(", not converged")?;
        }

        f.write_str(")")
    }
}

// ----------------------------------- tests -----------------------------------
