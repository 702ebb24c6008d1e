//! Integration tests for the severity inference library

use severity_inference::{
    parse_features, FeatureRecord, FeatureValue, Prediction, Predictor, Result, SeverityError,
    SeverityModel,
};

/// Stand-in model that maps one fixed record to a fixed label, used to
/// exercise the [`Predictor`] seam without a real artifact.
struct FixedModel {
    expected: FeatureRecord,
    label: String,
}

impl Predictor for FixedModel {
    fn predict(&mut self, record: &FeatureRecord) -> Result<Prediction> {
        if *record == self.expected {
            Ok(Prediction::Label(self.label.clone()))
        } else {
            Err(SeverityError::Inference(
                "missing feature column 'speed'".to_string(),
            ))
        }
    }
}

#[test]
fn test_record_from_tokens() {
    let record = parse_features(&["speed=55.5", "weather=rain"]).unwrap();
    assert_eq!(record.get("speed"), Some(&FeatureValue::Number(55.5)));
    assert_eq!(
        record.get("weather"),
        Some(&FeatureValue::Text("rain".to_string()))
    );
}

#[test]
fn test_malformed_token_reported_before_model_work() {
    let err = parse_features(&["speedlimit"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid feature format: speedlimit. Use key=value."
    );
}

#[test]
fn test_prediction_is_deterministic() {
    let record = parse_features(&["speed=55.5", "weather=rain"]).unwrap();
    let mut model = FixedModel {
        expected: record.clone(),
        label: "severe".to_string(),
    };

    let first = model.predict(&record).unwrap();
    let second = model.predict(&record).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "severe");
}

#[test]
fn test_predictor_reports_inference_failure() {
    let expected = parse_features(&["speed=55.5"]).unwrap();
    let mut model = FixedModel {
        expected,
        label: "severe".to_string(),
    };

    let other = parse_features(&["weather=rain"]).unwrap();
    let err = model.predict(&other).unwrap_err();
    assert!(err.to_string().contains("missing feature column"));
}

#[test]
fn test_output_line_formatting() {
    let prediction = Prediction::Label("severe".to_string());
    assert_eq!(
        format!("Predicted Accident Severity: {prediction}"),
        "Predicted Accident Severity: severe"
    );

    let prediction = Prediction::Value(2.0);
    assert_eq!(
        format!("Predicted Accident Severity: {prediction}"),
        "Predicted Accident Severity: 2"
    );
}

#[test]
fn test_missing_model_file() {
    let err = SeverityModel::load("does_not_exist.onnx").unwrap_err();
    assert!(matches!(err, SeverityError::ModelLoad(_)));
    assert!(err.to_string().contains("does_not_exist.onnx"));
}
