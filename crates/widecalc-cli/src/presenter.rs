//! CLI result presenter.

use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use widecalc_core::WideInt;

use crate::output::{format_duration, format_number, format_result};

/// Result of a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An arithmetic result.
    Value(WideInt),
    /// Result of comparing two operands.
    Comparison(Ordering),
    /// Whether the operand is prime.
    Primality(bool),
    /// Primes up to a limit, ascending.
    Primes(Vec<WideInt>),
}

/// Bare rendering, as printed in quiet mode and written to output files.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Comparison(ordering) => write!(f, "{}", *ordering as i8),
            Self::Primality(prime) => write!(f, "{prime}"),
            Self::Primes(primes) => {
                for (i, p) in primes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{p}")?;
                }
                Ok(())
            }
        }
    }
}

/// Presents command results to the user.
pub trait ResultPresenter {
    fn present_result(
        &self,
        operation: &str,
        strategy: &str,
        outcome: &Outcome,
        duration: Duration,
        details: bool,
    );

    fn present_error(&self, error: &str);
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Text printed by [`ResultPresenter::present_result`].
    #[must_use]
    pub fn render(
        &self,
        operation: &str,
        strategy: &str,
        outcome: &Outcome,
        duration: Duration,
        details: bool,
    ) -> String {
        if self.quiet {
            return outcome.to_string();
        }

        let mut lines = vec![
            format!("Operation: {operation}"),
            format!("Strategy: {strategy}"),
            format!("Duration: {}", format_duration(duration)),
        ];

        match outcome {
            Outcome::Value(value) => {
                if details {
                    lines.push(format!("Result digits: {}", value.digit_count()));
                    lines.push(format!("Result sign: {}", if value.is_negative() { "-" } else { "+" }));
                }
                lines.push(format!("Result: {}", format_result(value, self.verbose)));
            }
            Outcome::Comparison(ordering) => {
                let word = match ordering {
                    Ordering::Less => "less",
                    Ordering::Equal => "equal",
                    Ordering::Greater => "greater",
                };
                lines.push(format!("Result: {} ({word})", *ordering as i8));
            }
            Outcome::Primality(prime) => lines.push(format!("Result: {prime}")),
            Outcome::Primes(primes) => {
                let count = u64::try_from(primes.len()).unwrap_or(u64::MAX);
                lines.push(format!("Primes found: {}", format_number(count)));
                lines.push(format!("Result: {outcome}"));
            }
        }
        lines.join("\n")
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        operation: &str,
        strategy: &str,
        outcome: &Outcome,
        duration: Duration,
        details: bool,
    ) {
        println!("{}", self.render(operation, strategy, outcome, duration, details));
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(v: i64) -> Outcome {
        Outcome::Value(WideInt::from(v))
    }

    #[test]
    fn quiet_mode_prints_bare_value() {
        let presenter = CLIResultPresenter::new(false, true);
        let shown = presenter.render("mul", "FFT", &value(-132), Duration::from_millis(5), true);
        assert_eq!(shown, "-132");
    }

    #[test]
    fn normal_mode_lists_fields() {
        let presenter = CLIResultPresenter::new(false, false);
        let shown = presenter.render("add", "NTT", &value(55), Duration::from_millis(5), false);
        assert!(shown.starts_with("Operation: add\nStrategy: NTT\nDuration: "));
        assert!(shown.ends_with("Result: 55"));
        assert!(!shown.contains("Result digits"));
    }

    #[test]
    fn details_add_digit_count() {
        let presenter = CLIResultPresenter::new(false, false);
        let shown = presenter.render("pow", "FFT", &value(-832_040), Duration::from_millis(10), true);
        assert!(shown.contains("Result digits: 6"));
        assert!(shown.contains("Result sign: -"));
    }

    #[test]
    fn comparison_and_primality() {
        assert_eq!(Outcome::Comparison(Ordering::Less).to_string(), "-1");
        assert_eq!(Outcome::Comparison(Ordering::Greater).to_string(), "1");
        assert_eq!(Outcome::Primality(true).to_string(), "true");

        let presenter = CLIResultPresenter::new(false, false);
        let shown = presenter.render(
            "cmp",
            "FFT",
            &Outcome::Comparison(Ordering::Equal),
            Duration::ZERO,
            false,
        );
        assert!(shown.ends_with("Result: 0 (equal)"));
    }

    #[test]
    fn primes_are_space_separated() {
        let primes = Outcome::Primes([2, 3, 5, 7].into_iter().map(WideInt::from).collect());
        assert_eq!(primes.to_string(), "2 3 5 7");
        assert_eq!(Outcome::Primes(Vec::new()).to_string(), "");

        let presenter = CLIResultPresenter::new(false, false);
        let shown = presenter.render("primes", "FFT", &primes, Duration::ZERO, false);
        assert!(shown.contains("Primes found: 4"));
    }

    #[test]
    fn present_does_not_panic() {
        let presenter = CLIResultPresenter::new(true, false);
        presenter.present_result("mul", "FFT", &value(1), Duration::from_secs(1), true);
        presenter.present_error("division by zero");
    }
}
