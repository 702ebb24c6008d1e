use std::path::PathBuf;

use clap::Parser;

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about = "Predict accident severity from a trained pipeline", long_about = None)]
#[command(after_help = r#"Examples:
    severity-inference --model severity_pipeline.onnx --features speed=55.5 weather=rain
    severity-inference -m severity_pipeline.onnx -f speed=55.5 weather=rain road_type=highway
    severity-inference --model severity_pipeline.onnx --features speed=55.5 --verbose"#)]
pub struct Cli {
    /// Path to the serialized model artifact
    #[arg(short, long)]
    pub model: PathBuf,

    /// Feature values as key=value pairs
    #[arg(short, long, num_args = 1.., required = true)]
    pub features: Vec<String>,

    /// Show verbose output
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_args_basic() {
        let cli = Cli::parse_from([
            "app",
            "--model",
            "m.onnx",
            "--features",
            "speed=55.5",
            "weather=rain",
        ]);
        assert_eq!(cli.model, PathBuf::from("m.onnx"));
        assert_eq!(cli.features, vec!["speed=55.5", "weather=rain"]);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_args_short_forms() {
        let cli = Cli::parse_from(["app", "-m", "m.onnx", "-f", "speed=55.5", "--verbose"]);
        assert_eq!(cli.model, PathBuf::from("m.onnx"));
        assert_eq!(cli.features, vec!["speed=55.5"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_args_features_required() {
        let result = Cli::try_parse_from(["app", "--model", "m.onnx"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_model_required() {
        let result = Cli::try_parse_from(["app", "--features", "speed=55.5"]);
        assert!(result.is_err());
    }
}
