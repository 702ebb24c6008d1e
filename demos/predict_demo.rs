//! Minimal library usage: load a model and predict severity for one record.
//!
//! Run with:
//! ```bash
//! cargo run --example predict_demo -- severity_pipeline.onnx
//! ```

use severity_inference::{parse_features, Predictor, SeverityModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "severity_pipeline.onnx".to_string());

    let record = parse_features(&["speed=55.5", "weather=rain", "road_type=highway"])?;

    let mut model = SeverityModel::load(&model_path)?;
    let severity = model.predict(&record)?;

    println!("Predicted Accident Severity: {severity}");
    Ok(())
}
