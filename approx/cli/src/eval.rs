use {
    crate::{print::Printer, prompt::number_or_prompt},
    approx_math::{
        Approximation, MathResult, Transcendental, checked_bracketed_sqrt, checked_ln_series,
        compat, exp_series,
    },
    clap::Parser,
    colored::Colorize,
    serde::Serialize,
    std::fmt,
};

/// Exponent of the second term in the `b^2 + b^0.95` line printed after
/// every power.
const DEMO_EXPONENT: f64 = 0.95;

#[derive(Parser)]
pub struct PowCmd {
    /// The base [default: prompt]
    #[arg(allow_negative_numbers = true)]
    base: Option<f64>,

    /// The exponent [default: prompt]
    #[arg(allow_negative_numbers = true)]
    exponent: Option<f64>,

    /// Return -1 on domain errors instead of failing
    #[arg(long)]
    legacy: bool,
}

impl PowCmd {
    pub fn run(self, printer: Printer) -> anyhow::Result<()> {
        let base = number_or_prompt(self.base, "Enter the base")?;
        let exponent = number_or_prompt(self.exponent, "Enter the exponent")?;

        let report = PowReport::evaluate(base, exponent, self.legacy)?;

        printer.print(&report)
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct PowReport {
    base: f64,
    exponent: f64,
    result: f64,
    /// `base^2 + base^0.95`; absent if either power is undefined.
    demo: Option<f64>,
}

impl PowReport {
    fn evaluate(base: f64, exponent: f64, legacy: bool) -> MathResult<Self> {
        let pow = |exponent: f64| {
            if legacy {
                Ok(compat::pow_decimal(base, exponent))
            } else {
                base.checked_pow_decimal(exponent)
            }
        };

        let result = pow(exponent)?;

        let demo = match pow(2.0).and_then(|square| Ok(square + pow(DEMO_EXPONENT)?)) {
            Ok(demo) => Some(demo),
            Err(err) => {
                tracing::warn!(%err, "Skipping the demo sum");
                None
            },
        };

        Ok(Self {
            base,
            exponent,
            result,
            demo,
        })
    }
}

impl fmt::Display for PowReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ^ {} = {}",
            self.base,
            self.exponent,
            self.result.to_string().bold()
        )?;

        if let Some(demo) = self.demo {
            write!(
                f,
                "\n{base}^2 + {base}^{DEMO_EXPONENT} = {}",
                demo.to_string().bold(),
                base = self.base,
            )?;
        }

        Ok(())
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Function {
    Ln,
    Exp,
    Sqrt,
}

impl Function {
    fn legacy(self, x: f64) -> f64 {
        match self {
            Function::Ln => compat::ln(x),
            Function::Exp => compat::exp(x),
            Function::Sqrt => compat::sqrt(x),
        }
    }

    fn checked(self, x: f64) -> MathResult<Approximation> {
        match self {
            Function::Ln => checked_ln_series(x),
            Function::Exp => Ok(exp_series(x)),
            Function::Sqrt => checked_bracketed_sqrt(x),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Function::Ln => f.write_str("ln"),
            Function::Exp => f.write_str("exp"),
            Function::Sqrt => f.write_str("sqrt"),
        }
    }
}

#[derive(Parser)]
pub struct UnaryCmd {
    /// The argument
    #[arg(allow_negative_numbers = true)]
    x: f64,

    /// Return -1 on domain errors instead of failing
    #[arg(long)]
    legacy: bool,
}

impl UnaryCmd {
    pub fn run(self, function: Function, printer: Printer) -> anyhow::Result<()> {
        let evaluation = Evaluation::evaluate(function, self.x, self.legacy)?;

        printer.print(&evaluation)
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Evaluation {
    function: Function,
    input: f64,
    result: f64,
    /// Iteration details; only the checked routines report them.
    #[serde(skip_serializing_if = "Option::is_none")]
    approximation: Option<Approximation>,
}

impl Evaluation {
    fn evaluate(function: Function, input: f64, legacy: bool) -> MathResult<Self> {
        if legacy {
            return Ok(Self {
                function,
                input,
                result: function.legacy(input),
                approximation: None,
            });
        }

        let approximation = function.checked(input)?;

        if !approximation.converged {
            tracing::warn!(
                %function,
                input,
                iterations = approximation.iterations,
                "Approximation did not converge"
            );
        }

        Ok(Self {
            function,
            input,
            result: approximation.value,
            approximation: Some(approximation),
        })
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({}) = ", self.function, self.input)?;

        match &self.approximation {
            Some(approximation) => write!(f, "{approximation}"),
            None => write!(f, "{}", self.result.to_string().bold()),
        }
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        approx_math::{MathError, SENTINEL},
        test_case::test_case,
    };

    #[test]
    fn pow_report_includes_demo_sum() {
        let report = PowReport::evaluate(2.0, 10.0, false).unwrap();

        assert_eq!(report.result, 1024.0);
        assert!((report.demo.unwrap() - (4.0 + 2.0_f64.powf(0.95))).abs() < 1e-6);
    }

    #[test]
    fn pow_report_skips_undefined_demo() {
        let report = PowReport::evaluate(-2.0, 3.0, false).unwrap();

        assert_eq!(report.result, -8.0);
        assert_eq!(report.demo, None);
    }

    #[test]
    fn pow_report_fails_on_domain_error() {
        assert!(matches!(
            PowReport::evaluate(-2.0, 0.5, false),
            Err(MathError::NonPositiveBase { .. })
        ));
    }

    #[test]
    fn legacy_pow_report_never_fails() {
        let report = PowReport::evaluate(-2.0, 0.5, true).unwrap();

        assert_eq!(report.result, compat::exp(-0.5));
        assert!(report.demo.is_some());
    }

    #[test_case(Function::Ln, -1.0 => SENTINEL; "ln sentinel")]
    #[test_case(Function::Sqrt, -4.0 => SENTINEL; "sqrt sentinel")]
    #[test_case(Function::Sqrt, 0.25 => 0.25; "sqrt quirk")]
    #[test_case(Function::Exp, 0.0 => 1.0; "exp")]
    fn legacy_evaluation(function: Function, x: f64) -> f64 {
        let evaluation = Evaluation::evaluate(function, x, true).unwrap();
        assert_eq!(evaluation.approximation, None);
        evaluation.result
    }

    #[test]
    fn checked_evaluation_reports_approximation() {
        let evaluation = Evaluation::evaluate(Function::Sqrt, 0.25, false).unwrap();
        let approximation = evaluation.approximation.unwrap();

        assert!(approximation.converged);
        assert_eq!(evaluation.result, approximation.value);
        assert!((evaluation.result - 0.5).abs() < 1e-6);
    }

    #[test]
    fn checked_evaluation_rejects_domain_errors() {
        assert!(Evaluation::evaluate(Function::Ln, 0.0, false).is_err());
        assert!(Evaluation::evaluate(Function::Sqrt, -1.0, false).is_err());
    }

    #[test]
    fn evaluation_serializes_function_name() {
        let evaluation = Evaluation::evaluate(Function::Exp, 0.0, true).unwrap();
        let json = serde_json::to_value(&evaluation).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "function": "exp", "input": 0.0, "result": 1.0 })
        );
    }
}
