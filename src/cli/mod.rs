//! CLI module
//!
//! Provides:
//! - Argument parsing for CLI modes (patch, replace, inspect)
//! - Mode dispatch and error→exit-code mapping

pub mod args;
pub mod dispatch;

// Re-exports
pub use args::{parse_args, Args, Mode};
pub use dispatch::{run_cli_mode, ExitCode};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
