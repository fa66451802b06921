//! Error handling for the CLI application
//!
//! Every failure maps onto one of the four process exit codes the tool
//! guarantees; errors are terminal, nothing is retried.

use freqs_core::CoreError;
use std::fmt;

/// Process exit codes
pub mod exit_code {
    /// Successful run
    pub const SUCCESS: i32 = 0;
    /// Wrong command-line arguments
    pub const INVALID_ARGS: i32 = 1;
    /// Input file could not be opened or read fully
    pub const INVALID_INPUT_FILE: i32 = 2;
    /// Output file could not be created or written
    pub const INVALID_OUTPUT_FILE: i32 = 3;
    /// Input is not valid UTF-8
    pub const INVALID_FILE_FORMAT: i32 = 4;
}

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file cannot be opened or read in full
    InputFile(String),
    /// Output file cannot be created or written
    OutputFile(String),
    /// Input buffer failed UTF-8 decoding
    FileFormat(CoreError),
}

impl CliError {
    /// The process exit code this error terminates with
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InputFile(_) => exit_code::INVALID_INPUT_FILE,
            CliError::OutputFile(_) => exit_code::INVALID_OUTPUT_FILE,
            CliError::FileFormat(_) => exit_code::INVALID_FILE_FORMAT,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputFile(msg) => write!(f, "Invalid input file: {msg}"),
            CliError::OutputFile(msg) => write!(f, "Invalid output file: {msg}"),
            CliError::FileFormat(err) => write!(f, "Invalid file format: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::FileFormat(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::FileFormat(err)
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
