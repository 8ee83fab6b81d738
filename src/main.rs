use std::process;

use component_readme::cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    init_logging(args.verbose);

    let command = Command::from_args(args);

    // Exit with a code derived from the error severity
    process::exit(command.run());
}

/// Logs go to stderr; `RUST_LOG` wins over the verbosity flag
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
