#![allow(clippy::multiple_crate_versions)]

//! # Severity Inference
//!
//! Accident severity prediction from a pre-trained pipeline, written in Rust.
//! Loads a serialized model artifact (ONNX) and applies it to one
//! user-supplied feature vector, printing the predicted severity.
//!
//! There is no training logic, no batching, and no serving: one process, one
//! prediction, one line of output.
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use severity_inference::{parse_features, Predictor, SeverityModel};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Values are typed best-effort: numeric if they parse, text otherwise
//!     let record = parse_features(&["speed=55.5", "weather=rain"])?;
//!
//!     let mut model = SeverityModel::load("severity_pipeline.onnx")?;
//!     let severity = model.predict(&record)?;
//!
//!     println!("Predicted Accident Severity: {severity}");
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Predict from key=value feature assignments
//! severity-inference --model severity_pipeline.onnx --features speed=55.5 weather=rain
//!
//! # Short forms and verbose progress output
//! severity-inference -m severity_pipeline.onnx -f speed=55.5 weather=rain --verbose
//! ```
//!
//! On success the tool prints exactly one line to stdout:
//!
//! ```text
//! Predicted Accident Severity: <value>
//! ```
//!
//! Malformed feature tokens, model-load failures, and inference failures are
//! all reported on stderr with exit code 1.
//!
//! ## Model artifacts
//!
//! The expected artifact is an ONNX export of a tabular pipeline: one named
//! graph input per feature column (float tensors for numeric columns, string
//! tensors for categorical ones), with the predicted label as the first graph
//! output. The artifact's binary format is owned entirely by ONNX Runtime;
//! everything above [`SeverityModel`] depends only on the [`Predictor`]
//! trait.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | [`SeverityModel`] adapter and the [`Predictor`] trait |
//! | [`features`] | [`FeatureRecord`] assembly and value typing |
//! | [`error`] | Error types ([`SeverityError`], [`Result`]) |
//! | [`cli`] | Argument parsing and the prediction runner |

// Modules
pub mod cli;
pub mod error;
pub mod features;
pub mod model;

// Re-export main types for convenience
pub use error::{Result, SeverityError};
pub use features::{convert_value, parse_feature, parse_features, FeatureRecord, FeatureValue};
pub use model::{Prediction, Predictor, SeverityModel};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
