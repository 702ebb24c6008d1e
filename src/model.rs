//! Model loading and inference.
//!
//! This module provides the [`SeverityModel`] struct for loading a serialized
//! pipeline artifact (ONNX) and running single-record inference, plus the
//! [`Predictor`] trait that hides the artifact format from the rest of the
//! crate.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use ort::session::builder::GraphOptimizationLevel;
use ort::session::{Session, SessionInputValue};
use ort::value::{DynValue, Tensor};

use crate::error::{Result, SeverityError};
use crate::features::{FeatureRecord, FeatureValue};

/// A single prediction extracted from the model's output.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    /// Categorical label (string class output).
    Label(String),
    /// Numeric value (integer class index or regression output).
    Value(f64),
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => write!(f, "{label}"),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Capability exposed by any model that can score a feature record.
///
/// Everything above the model adapter depends only on this trait, never on
/// the concrete artifact format behind it.
pub trait Predictor {
    /// Produce a prediction for a single feature record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is missing columns the model expects
    /// or inference fails.
    fn predict(&mut self, record: &FeatureRecord) -> Result<Prediction>;
}

/// Severity model backed by an ONNX Runtime session.
///
/// Pipelines exported from training tooling expose one named graph input per
/// feature column (float tensors for numeric columns, string tensors for
/// categorical ones) and emit the predicted label as the first graph output.
///
/// # Example
///
/// ```no_run
/// use severity_inference::{SeverityModel, Predictor, parse_features};
///
/// let mut model = SeverityModel::load("severity_pipeline.onnx").unwrap();
/// let record = parse_features(&["speed=55.5", "weather=rain"]).unwrap();
/// let prediction = model.predict(&record).unwrap();
/// println!("{prediction}");
/// ```
pub struct SeverityModel {
    /// ONNX Runtime session.
    session: Session,
    /// Graph input names, one per expected feature column.
    input_names: Vec<String>,
    /// Graph output names; the first carries the predicted label.
    output_names: Vec<String>,
}

impl SeverityModel {
    /// Load a severity model from an ONNX file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the serialized model artifact.
    ///
    /// # Errors
    ///
    /// Returns [`SeverityError::ModelLoad`] if the file doesn't exist, can't
    /// be deserialized, or declares no outputs.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SeverityError::ModelLoad(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| {
                SeverityError::ModelLoad(format!("Failed to create session builder: {e}"))
            })?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| {
                SeverityError::ModelLoad(format!("Failed to set optimization level: {e}"))
            })?
            // Single-shot CLI, one record per process: one intra-op thread.
            .with_intra_threads(1)
            .map_err(|e| {
                SeverityError::ModelLoad(format!("Failed to set intra-thread count: {e}"))
            })?
            .commit_from_file(path)
            .map_err(|e| SeverityError::ModelLoad(format!("Failed to load model: {e}")))?;

        let input_names: Vec<String> = session.inputs.iter().map(|i| i.name.clone()).collect();
        let output_names: Vec<String> = session.outputs.iter().map(|o| o.name.clone()).collect();

        if output_names.is_empty() {
            return Err(SeverityError::ModelLoad(
                "Model declares no outputs".to_string(),
            ));
        }

        Ok(Self {
            session,
            input_names,
            output_names,
        })
    }

    /// Feature columns the model expects, in graph order.
    #[must_use]
    pub fn input_names(&self) -> &[String] {
        &self.input_names
    }

    /// Build a 1x1 input tensor for one feature value.
    fn build_input(value: &FeatureValue) -> Result<SessionInputValue<'static>> {
        let tensor: DynValue = match value {
            FeatureValue::Number(n) => {
                #[allow(clippy::cast_possible_truncation)]
                let data = vec![*n as f32];
                Tensor::from_array((vec![1_i64, 1], data))
                    .map_err(|e| {
                        SeverityError::Inference(format!("Failed to create input tensor: {e}"))
                    })?
                    .into_dyn()
            }
            FeatureValue::Text(s) => Tensor::from_string_array((vec![1_i64, 1], std::slice::from_ref(s)))
                .map_err(|e| {
                    SeverityError::Inference(format!("Failed to create input tensor: {e}"))
                })?
                .into_dyn(),
        };
        Ok(SessionInputValue::from(tensor))
    }
}

impl Predictor for SeverityModel {
    /// Run inference on a single feature record.
    ///
    /// Every graph input must have a matching record entry; record entries
    /// with no matching input are ignored.
    fn predict(&mut self, record: &FeatureRecord) -> Result<Prediction> {
        let mut inputs: Vec<(Cow<'_, str>, SessionInputValue<'_>)> =
            Vec::with_capacity(self.input_names.len());

        for name in &self.input_names {
            let value = record.get(name).ok_or_else(|| {
                SeverityError::Inference(format!("missing feature column '{name}'"))
            })?;
            inputs.push((Cow::Owned(name.clone()), Self::build_input(value)?));
        }

        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| SeverityError::Inference(format!("Inference failed: {e}")))?;

        // The first declared output carries the predicted label.
        let output_name = &self.output_names[0];
        let output = outputs.get(output_name.as_str()).ok_or_else(|| {
            SeverityError::Inference(format!("Output '{output_name}' not found"))
        })?;

        extract_first(output)
    }
}

impl fmt::Debug for SeverityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeverityModel")
            .field("input_names", &self.input_names)
            .field("output_names", &self.output_names)
            .finish()
    }
}

/// Extract the first element of a model output, trying string, then `i64`,
/// then `f32` tensor forms.
fn extract_first(output: &DynValue) -> Result<Prediction> {
    if let Ok((_, labels)) = output.try_extract_strings() {
        return labels
            .first()
            .cloned()
            .map(Prediction::Label)
            .ok_or_else(empty_output);
    }

    if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
        #[allow(clippy::cast_precision_loss)]
        return data
            .first()
            .map(|&v| Prediction::Value(v as f64))
            .ok_or_else(empty_output);
    }

    if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
        return data
            .first()
            .map(|&v| Prediction::Value(f64::from(v)))
            .ok_or_else(empty_output);
    }

    Err(SeverityError::Inference(
        "unsupported model output type".to_string(),
    ))
}

fn empty_output() -> SeverityError {
    SeverityError::Inference("model returned an empty output".to_string())
}
