//! widecalc library: application logic for the command-line calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod primes;
