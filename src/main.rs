use std::process;

use clap::Parser;

use severity_inference::cli::args::Cli;
use severity_inference::cli::logging::set_verbose;
use severity_inference::cli::predict;
use severity_inference::error;

fn main() {
    let cli = Cli::parse();
    set_verbose(cli.verbose);

    if let Err(e) = predict::run(&cli) {
        error!("{e}");
        process::exit(1);
    }
}
