//! Greeting consumer orchestration.
//!
//! The consumer is the composition point: it resolves the optional
//! caller-supplied name, delegates formatting to its injected dependency
//! exactly once, and publishes the resulting bytes to a caller-owned sink.

use std::io::Write;
use std::sync::Arc;

use crate::error::{log_greeting_error, GreetingError};
use crate::formatter::{self, GreetingFormatter};

/// Fallback used when the caller supplies no name.
pub const DEFAULT_NAME: &str = "Stranger";

/// Orchestrator that resolves defaults and publishes formatted greetings.
///
/// Holds its formatter for its entire lifetime, shared by reference: the
/// formatter is stateless, so any number of consumers may point at one
/// instance. Construction is the injection seam: production code and tests
/// both pass the dependency through [`GreetingConsumer::with_formatter`],
/// with [`GreetingConsumer::new`] binding to the shared default.
pub struct GreetingConsumer {
    formatter: Arc<dyn GreetingFormatter>,
}

impl GreetingConsumer {
    /// Create a consumer bound to the shared default formatter.
    pub fn new() -> Self {
        Self::with_formatter(formatter::shared_formatter())
    }

    /// Create a consumer with an explicitly injected formatter.
    pub fn with_formatter(formatter: Arc<dyn GreetingFormatter>) -> Self {
        Self { formatter }
    }

    /// Resolve `name`, format the greeting, and append its UTF-8 bytes to
    /// `output`.
    ///
    /// An absent name resolves to [`DEFAULT_NAME`]; a present name is used
    /// verbatim, including the empty string. The formatter is invoked exactly
    /// once per call, and the encoded greeting is committed with a single
    /// `write_all`. A failed sink write surfaces as
    /// [`GreetingError::SinkWrite`] carrying the originating `io::Error`; no
    /// retry is attempted and no bytes are re-sent.
    pub fn greet(&self, name: Option<&str>, output: &mut dyn Write) -> Result<(), GreetingError> {
        let resolved = name.unwrap_or(DEFAULT_NAME);
        let greeting = self.formatter.greet(resolved);

        output.write_all(greeting.as_bytes()).map_err(|source| {
            let err = GreetingError::SinkWrite { source };
            log_greeting_error(&err, "greet");
            err
        })
    }
}

impl Default for GreetingConsumer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingFormatter;
    use std::io;

    /// Sink that rejects every write, simulating a closed destination.
    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_greet_with_name_writes_greeting_bytes() {
        let consumer = GreetingConsumer::new();
        let mut sink = Vec::new();

        consumer
            .greet(Some("Albert"), &mut sink)
            .expect("vec sink accepts all writes");

        assert_eq!(sink, b"Hello Albert");
    }

    #[test]
    fn test_greet_without_name_uses_fallback() {
        let consumer = GreetingConsumer::new();
        let mut sink = Vec::new();

        consumer
            .greet(None, &mut sink)
            .expect("vec sink accepts all writes");

        assert_eq!(sink, b"Hello Stranger");
    }

    #[test]
    fn test_empty_name_is_used_verbatim() {
        let consumer = GreetingConsumer::new();
        let mut sink = Vec::new();

        consumer
            .greet(Some(""), &mut sink)
            .expect("vec sink accepts all writes");

        assert_eq!(sink, b"Hello ");
    }

    #[test]
    fn test_sequential_calls_append_in_order() {
        let consumer = GreetingConsumer::new();
        let mut sink = Vec::new();

        consumer
            .greet(Some("Ada"), &mut sink)
            .expect("vec sink accepts all writes");
        consumer
            .greet(Some("Grace"), &mut sink)
            .expect("vec sink accepts all writes");

        assert_eq!(sink, b"Hello AdaHello Grace");
    }

    #[test]
    fn test_failing_sink_propagates_error_after_one_formatter_call() {
        let formatter = Arc::new(RecordingFormatter::new());
        formatter.stub_greeting("Albert", "Hello Albert");
        let consumer = GreetingConsumer::with_formatter(formatter.clone());

        let result = consumer.greet(Some("Albert"), &mut FailingSink);

        let err = result.expect_err("write to a closed sink must fail");
        match err {
            GreetingError::SinkWrite { source } => {
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
        }

        // The formatter ran exactly once before the write was attempted.
        formatter.verify_greet("Albert", 1);
        formatter.confirm_verified();
    }

    #[test]
    fn test_consumers_share_one_formatter_instance() {
        let formatter = Arc::new(RecordingFormatter::new());
        formatter.stub_greeting("Ada", "Hello Ada");
        formatter.stub_greeting("Grace", "Hello Grace");

        let first = GreetingConsumer::with_formatter(formatter.clone());
        let second = GreetingConsumer::with_formatter(formatter.clone());

        let mut sink = Vec::new();
        first
            .greet(Some("Ada"), &mut sink)
            .expect("vec sink accepts all writes");
        second
            .greet(Some("Grace"), &mut sink)
            .expect("vec sink accepts all writes");

        formatter.verify_greet("Ada", 1);
        formatter.verify_greet("Grace", 1);
        formatter.confirm_verified();
    }
}
