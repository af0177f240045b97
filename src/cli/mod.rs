//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Mode implementations (list, detect, translate).
pub mod commands;

pub use args::Args;
