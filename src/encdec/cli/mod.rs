//! # CLI Layer
//!
//! The command-line client for the encdec library. This is the only place that
//! parses arguments, initializes logging, touches stdout/stderr or decides exit
//! codes.
//!
//! - `setup`: clap definitions, version string, legacy flag normalization
//! - `commands`: `run()` and the per-command handlers
//! - `print`: colored message output

mod commands;
mod print;
mod setup;

pub use commands::run;
