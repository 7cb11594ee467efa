//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use widecalc_cli::output::write_to_file;
use widecalc_cli::presenter::{CLIResultPresenter, Outcome, ResultPresenter};
use widecalc_core::{Calculator, WideInt};

use crate::config::{AppConfig, Operation, Operands};
use crate::errors::ConfigError;
use crate::primes::{is_prime, primes_up_to};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        widecalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let operation = config.operation.as_ref().ok_or(ConfigError::MissingOperation)?;
    let opts = config.options()?;
    let calc = Calculator::from_options(&opts);
    debug!(?opts, strategy = calc.name(), operation = operation.name(), "starting");

    let start = Instant::now();
    let outcome = execute(&calc, operation)?;
    let duration = start.elapsed();

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    presenter.present_result(operation.name(), calc.name(), &outcome, duration, config.details);

    if let Some(path) = &config.output {
        write_to_file(path, &outcome)
            .with_context(|| format!("cannot write result to {}", path.display()))?;
    }

    Ok(())
}

/// Evaluate a single operation.
pub fn execute(calc: &Calculator, operation: &Operation) -> Result<Outcome> {
    let outcome = match operation {
        Operation::Add(ops) => {
            let (a, b) = operands(ops)?;
            Outcome::Value(calc.add(&a, &b))
        }
        Operation::Sub(ops) => {
            let (a, b) = operands(ops)?;
            Outcome::Value(calc.subtract(&a, &b))
        }
        Operation::Mul(ops) => {
            let (a, b) = operands(ops)?;
            Outcome::Value(calc.multiply(&a, &b))
        }
        Operation::Div(ops) => {
            let (a, b) = operands(ops)?;
            Outcome::Value(calc.divide(&a, &b)?)
        }
        Operation::Mod(ops) => {
            let (a, b) = operands(ops)?;
            Outcome::Value(calc.modulo(&a, &b)?)
        }
        Operation::Pow(ops) => {
            let (a, b) = operands(ops)?;
            Outcome::Value(calc.power(&a, &b)?)
        }
        Operation::Cmp(ops) => {
            let (a, b) = operands(ops)?;
            Outcome::Comparison(calc.compare(&a, &b))
        }
        Operation::IsPrime { n } => Outcome::Primality(is_prime(calc, &operand(n)?)),
        Operation::Primes { limit } => Outcome::Primes(primes_up_to(calc, &operand(limit)?)),
    };
    Ok(outcome)
}

fn operand(s: &str) -> Result<WideInt> {
    s.parse::<WideInt>()
        .with_context(|| format!("invalid operand {s:?}"))
}

fn operands(ops: &Operands) -> Result<(WideInt, WideInt)> {
    Ok((operand(&ops.a)?, operand(&ops.b)?))
}
