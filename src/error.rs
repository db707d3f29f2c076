// Error types for the greeting service
//
// This module defines the custom error type for greeting publication,
// providing structured error handling with error codes suitable for
// reporting by surrounding surfaces such as the CLI.

use log::error;
use std::fmt;
use std::io;

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling across
/// the crate's callers.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

/// Log a greeting error with structured context
///
/// Logs greeting errors with structured fields including:
/// - error_code: Numeric error code for programmatic handling
/// - component: The component where the error occurred
/// - message: Human-readable error message
/// - context: Additional contextual information
pub fn log_greeting_error(err: &GreetingError, context: &str) {
    error!(
        "Greeting error in {}: code={}, component=GreetingConsumer, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Greeting publication errors
///
/// The only externally observable failure kind: the caller-supplied sink
/// rejected the write. Nothing inside the formatter or the name resolution
/// can fail.
///
/// Error code range: 3001
#[derive(Debug)]
pub enum GreetingError {
    /// Writing the greeting to the caller-supplied sink failed
    SinkWrite { source: io::Error },
}

impl ErrorCode for GreetingError {
    fn code(&self) -> i32 {
        match self {
            GreetingError::SinkWrite { .. } => 3001,
        }
    }

    fn message(&self) -> String {
        match self {
            GreetingError::SinkWrite { source } => {
                format!("Failed to write greeting to sink: {}", source)
            }
        }
    }
}

impl fmt::Display for GreetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GreetingError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for GreetingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GreetingError::SinkWrite { source } => Some(source),
        }
    }
}

/// Convert from std::io::Error, keeping the original failure intact
impl From<io::Error> for GreetingError {
    fn from(err: io::Error) -> Self {
        GreetingError::SinkWrite { source: err }
    }
}
