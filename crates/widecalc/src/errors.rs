//! Error handling and exit codes.

use std::io;
use std::path::PathBuf;

use widecalc_core::exit_codes;
use widecalc_core::{ParseWideIntError, WideIntError};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no operation given (try --help)")]
    MissingOperation,
}

/// Exit code for an arithmetic error.
#[must_use]
pub fn handle_error(err: &WideIntError) -> i32 {
    match err {
        WideIntError::DivisionByZero | WideIntError::NegativeExponent => {
            exit_codes::ERROR_ARITHMETIC
        }
        WideIntError::Parse(_) | WideIntError::Overflow { .. } => exit_codes::ERROR_INPUT,
    }
}

/// Exit code for any error that reached the application boundary.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<WideIntError>() {
        handle_error(err)
    } else if err.downcast_ref::<ParseWideIntError>().is_some() {
        exit_codes::ERROR_INPUT
    } else if err.downcast_ref::<ConfigError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&WideIntError::DivisionByZero), 2);
        assert_eq!(handle_error(&WideIntError::NegativeExponent), 2);
        assert_eq!(handle_error(&WideIntError::Overflow { target: "i64" }), 3);
        assert_eq!(handle_error(&ParseWideIntError::Empty.into()), 3);
    }

    #[test]
    fn exit_codes_through_context() {
        let err = Err::<(), _>(ParseWideIntError::InvalidDigit { ch: 'x', index: 0 })
            .context("invalid operand \"x\"")
            .unwrap_err();
        assert_eq!(exit_code(&err), exit_codes::ERROR_INPUT);

        let err = anyhow::Error::from(WideIntError::DivisionByZero);
        assert_eq!(exit_code(&err), exit_codes::ERROR_ARITHMETIC);
        assert_eq!(err.to_string(), "division by zero");

        let err = anyhow::Error::from(ConfigError::MissingOperation);
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONFIG);

        assert_eq!(exit_code(&anyhow::anyhow!("disk full")), exit_codes::ERROR_GENERIC);
    }
}
