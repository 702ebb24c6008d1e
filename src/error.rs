//! Error types for the severity inference library.

use std::fmt;

/// Result type alias for severity inference operations.
pub type Result<T> = std::result::Result<T, SeverityError>;

/// Main error type for the severity inference library.
#[derive(Debug)]
pub enum SeverityError {
    /// Error loading the ONNX model artifact.
    ModelLoad(String),
    /// Error during model inference.
    Inference(String),
    /// A feature token that is not of the form `key=value`.
    InvalidFeature(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
}

impl fmt::Display for SeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelLoad(msg) => write!(f, "Model load error: {msg}"),
            Self::Inference(msg) => write!(f, "Inference error: {msg}"),
            Self::InvalidFeature(token) => {
                write!(f, "Invalid feature format: {token}. Use key=value.")
            }
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for SeverityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SeverityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeverityError::ModelLoad("test".to_string());
        assert_eq!(err.to_string(), "Model load error: test");

        let err = SeverityError::Inference("test".to_string());
        assert_eq!(err.to_string(), "Inference error: test");
    }

    #[test]
    fn test_invalid_feature_display() {
        let err = SeverityError::InvalidFeature("speedlimit".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid feature format: speedlimit. Use key=value."
        );
    }
}
