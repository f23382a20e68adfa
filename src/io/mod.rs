//! Command line, run configuration, export and error reporting

/// Command-line parsing and the end-to-end generation run
pub mod cli;
/// Defaults and the validated run configuration
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Output naming and PNG writing
pub mod image;
/// Progress display while panels are submitted
pub mod progress;
