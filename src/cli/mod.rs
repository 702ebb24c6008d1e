//! CLI module for running severity predictions.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the prediction runner.

// Modules
/// CLI arguments.
pub mod args;

/// Verbosity flag and message macros.
pub mod logging;

/// Prediction logic.
pub mod predict;
