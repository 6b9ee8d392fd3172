//! Error handling for the Templatizer application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Templatizer operations.
///
/// This enum represents all possible errors that can occur within the
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// No configuration file was found in the lookup directory
    #[error("No configuration file found in '{config_dir}'. Tried: {config_files}.")]
    ConfigNotFoundError { config_dir: String, config_files: String },

    /// Represents errors that occur during configuration parsing
    #[error("Invalid configuration format: {0}.")]
    ConfigParseError(String),

    /// Represents errors in compiling configured source patterns
    #[error("Invalid source pattern. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    /// Raised by a template compiler when template text cannot be turned
    /// into a function
    #[error("Template compilation failed: {0}.")]
    CompileError(String),

    #[error("Cannot process the source file '{source_file}'. Original error: {e}")]
    ProcessError { source_file: String, e: String },

    #[error("Target '{target}' is not defined in the configuration.")]
    UnknownTargetError { target: String },
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
