//! templatizr turns a concrete source tree into scaffold templates.
//! Text files get a list of literal replacements applied, binary files are
//! copied as-is, and the directory layout is mirrored under an output root.

/// Command-line interface module for templatizr
pub mod cli;

/// Replacement list resolution from `--replace` or a config file
/// Supports JSON and YAML config documents
pub mod config;

/// Error types and handling for templatizr
pub mod error;

/// `env_logger` setup
pub mod logger;

/// Pipeline orchestration
pub mod processor;

/// Glob based input file selection
pub mod selector;

/// UTF-8 detection and literal text substitution
pub mod transform;

/// Destination paths, directory creation and permissions
pub mod writer;
