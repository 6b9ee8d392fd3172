//! Templatizer is a build task that compiles HTML template files into a
//! single JavaScript module bundle. Each source file becomes a named
//! rendering function, and the bundle is wrapped in one of the supported
//! module formats (CommonJS, AMD, or a namespace attachment).

/// Command-line interface module for the Templatizer application
pub mod cli;

/// Template-to-function compilation
/// The compiler seam the task depends on, plus the built-in implementation
pub mod compiler;

/// Configuration handling for Templatizer builds
/// Supports JSON and YAML formats (templatizer.json, templatizer.yml, templatizer.yaml)
pub mod config;

/// Error types and handling for the Templatizer application
pub mod error;

/// Fixed module-format descriptor table and option resolution
pub mod formats;

/// Core task orchestration
/// Combines all components to produce the bundled output files
pub mod processor;

/// Source pattern expansion for file groups
pub mod sources;
