//! CLI output formatting.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use tracing::debug;
use widecalc_core::WideInt;

/// Digits shown at each end of a truncated result.
const EDGE_DIGITS: usize = 50;

/// Format a `WideInt` for display, potentially truncating.
#[must_use]
pub fn format_result(value: &WideInt, verbose: bool) -> String {
    let digits = value.magnitude().to_string();
    if verbose || digits.len() <= 2 * EDGE_DIGITS {
        return value.to_string();
    }
    let sign = if value.is_negative() { "-" } else { "" };
    format!(
        "{sign}{}...{} ({} digits)",
        &digits[..EDGE_DIGITS],
        &digits[digits.len() - EDGE_DIGITS..],
        digits.len()
    )
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write a result to a file, followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, value: &impl Display) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    debug!(path = %path.display(), "result written");
    Ok(())
}
