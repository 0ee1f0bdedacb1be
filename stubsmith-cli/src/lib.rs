//! Command-line front end for `stubsmith`.
//!
//! The binary loads layered settings, reads a model schema snapshot, and
//! writes one RBI file per model. Everything except argument parsing and
//! subscriber installation lives here so it can be tested without spawning a
//! process.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
mod fs_helpers;
pub mod logging;
pub mod output;

pub use error::CliError;
