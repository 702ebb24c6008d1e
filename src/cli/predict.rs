use crate::cli::args::Cli;
use crate::error::Result;
use crate::features::parse_features;
use crate::model::{Predictor, SeverityModel};
use crate::{verbose, warn};

/// Run a single severity prediction.
///
/// Parses the feature tokens, loads the model, runs inference, and prints
/// the result. Feature parsing happens first so a malformed token is
/// reported before any model work.
///
/// # Errors
///
/// Returns an error for a malformed feature token, a model that can't be
/// loaded, or a failed inference. The caller maps any error to stderr and a
/// non-zero exit.
pub fn run(args: &Cli) -> Result<()> {
    let record = parse_features(&args.features)?;
    verbose!("Parsed {} feature(s)", record.len());

    let mut model = SeverityModel::load(&args.model)?;
    verbose!("Loaded model from {}", args.model.display());

    for (name, _) in record.iter() {
        if !model.input_names().iter().any(|input| input == name) {
            warn!("Feature '{name}' is not an input of this model and will be ignored");
        }
    }

    let severity = model.predict(&record)?;
    println!("Predicted Accident Severity: {severity}");

    Ok(())
}
