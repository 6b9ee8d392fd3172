//! Templatizer's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration loading, and
//! invocation of the templatize task.

use templatizer::{
    cli::{get_args, Args},
    compiler::{FuncCompiler, TemplateCompiler},
    config::{get_config, load_config_file},
    error::{default_error_handler, Result},
    processor::run_task,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Flow
/// 1. Loads the build configuration (explicit file or directory lookup)
/// 2. Runs the requested targets with the built-in compiler
/// 3. Prints a completion summary
fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => get_config(&args.directory)?,
    };

    let compiler: Box<dyn TemplateCompiler> = Box::new(FuncCompiler::new());
    let written = run_task(&args.directory, &config, &args.targets, &*compiler)?;

    println!("Templatize task completed: {} file(s) created.", written);
    Ok(())
}
