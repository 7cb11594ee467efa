//! Application configuration from CLI flags, environment and config file.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use widecalc_core::{Options, TransformKind};

use crate::errors::ConfigError;

/// widecalc: arbitrary-precision integer arithmetic with FFT/NTT multiplication.
#[derive(Parser, Debug)]
#[command(name = "widecalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    #[command(subcommand)]
    pub operation: Option<Operation>,

    /// Transform used for multiplication: complex (fft) or modular (ntt).
    #[arg(long, global = true, env = "WIDECALC_TRANSFORM", value_parser = parse_transform)]
    pub transform: Option<TransformKind>,

    /// Run transforms on a single thread.
    #[arg(long, global = true)]
    pub no_parallel: bool,

    /// Transform length at which halves are forked onto the thread pool.
    #[arg(long, global = true, env = "WIDECALC_PARALLEL_THRESHOLD")]
    pub parallel_threshold: Option<usize>,

    /// Use schoolbook multiplication instead of a transform.
    #[arg(long, global = true)]
    pub schoolbook: bool,

    /// JSON file with default options; flags override its values.
    #[arg(long, global = true, env = "WIDECALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output (full results, debug logging).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show detailed information.
    #[arg(short, long, global = true)]
    pub details: bool,

    /// Also write the result to this file.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Command to run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Sum a + b.
    Add(Operands),
    /// Difference a - b.
    Sub(Operands),
    /// Product a * b.
    Mul(Operands),
    /// Quotient a / b, truncated toward zero.
    Div(Operands),
    /// Remainder of a / b, with the sign of a.
    Mod(Operands),
    /// Power a^b for b >= 0.
    Pow(Operands),
    /// Compare a with b; prints -1, 0 or 1.
    Cmp(Operands),
    /// Test n for primality by trial division.
    IsPrime {
        #[arg(allow_negative_numbers = true)]
        n: String,
    },
    /// List the primes up to a limit.
    Primes {
        #[arg(allow_negative_numbers = true)]
        limit: String,
    },
}

impl Operation {
    /// Command name as typed on the command line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Sub(_) => "sub",
            Self::Mul(_) => "mul",
            Self::Div(_) => "div",
            Self::Mod(_) => "mod",
            Self::Pow(_) => "pow",
            Self::Cmp(_) => "cmp",
            Self::IsPrime { .. } => "is-prime",
            Self::Primes { .. } => "primes",
        }
    }
}

/// Two decimal operands.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Operands {
    #[arg(allow_negative_numbers = true)]
    pub a: String,
    #[arg(allow_negative_numbers = true)]
    pub b: String,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Arithmetic options: config file first, then flags on top.
    pub fn options(&self) -> Result<Options, ConfigError> {
        let mut opts = match &self.config {
            Some(path) => load_options(path)?,
            None => Options::default(),
        };
        if let Some(kind) = self.transform {
            opts.transform = kind;
        }
        if self.no_parallel {
            opts.parallel = false;
        }
        if let Some(threshold) = self.parallel_threshold {
            opts.parallel_threshold = threshold;
        }
        if self.schoolbook {
            opts.schoolbook = true;
        }
        Ok(opts.normalize())
    }
}

/// Read `Options` from a JSON file.
pub fn load_options(path: &Path) -> Result<Options, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a transform name.
fn parse_transform(s: &str) -> Result<TransformKind, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "complex" | "fft" => Ok(TransformKind::Complex),
        "modular" | "ntt" => Ok(TransformKind::Modular),
        other => Err(format!("unknown transform {other:?} (expected complex or modular)")),
    }
}
