//! Command-line interface implementation for Templatizer.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for Templatizer.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Templatizer: compile HTML templates into a JavaScript module bundle",
    long_about = None
)]
pub struct Args {
    /// Build targets to run; every configured target runs when omitted
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Path to the configuration file, bypassing the default lookup
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base directory for configuration lookup and relative paths
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
pub fn get_args() -> Args {
    Args::parse()
}
