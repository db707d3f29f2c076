// Greeting Service Core - dependency-injected greeting components
// Stateless formatting behind an explicit injection seam, published to caller-owned sinks

// Module declarations
pub mod consumer;
pub mod error;
pub mod formatter;
pub mod testing;

// Re-exports for convenience
pub use consumer::{GreetingConsumer, DEFAULT_NAME};
pub use error::{ErrorCode, GreetingError};
pub use formatter::{shared_formatter, GreetingFormatter, HelloFormatter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wiring_end_to_end() {
        // The crate-level surface must work without any explicit wiring:
        // default consumer, shared formatter, plain in-memory sink.
        let mut sink = Vec::new();
        GreetingConsumer::default()
            .greet(Some("World"), &mut sink)
            .expect("in-memory sink write cannot fail");
        assert_eq!(sink, b"Hello World");
    }
}
