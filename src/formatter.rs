//! Greeting formatting abstractions.
//!
//! The formatter is the leaf collaborator: a pure transformation from a name
//! to the text that should be said. It is defined as a trait so consumers can
//! take it as an injected dependency and tests can substitute a recording
//! double without touching the real logic.

use std::sync::Arc;

use once_cell::sync::Lazy;

/// Trait implemented by greeting formatters.
///
/// Implementations must be stateless with respect to individual calls: the
/// name is never retained beyond the invocation, and a single instance may be
/// shared across threads and consumers without synchronization.
pub trait GreetingFormatter: Send + Sync {
    /// Produce the greeting text for `name`.
    ///
    /// Total over all inputs: implementations accept any string, including
    /// the empty one, and never fail.
    fn greet(&self, name: &str) -> String;
}

/// Default formatter backed by plain concatenation.
///
/// Produces `"Hello " + name` by concatenation only; the name is never
/// trimmed or case-folded.
#[derive(Default)]
pub struct HelloFormatter {
    _unit: (),
}

impl GreetingFormatter for HelloFormatter {
    fn greet(&self, name: &str) -> String {
        format!("Hello {name}")
    }
}

/// Process-wide shared formatter instance.
static SHARED: Lazy<Arc<dyn GreetingFormatter>> =
    Lazy::new(|| Arc::new(HelloFormatter::default()));

/// Access the shared stateless formatter bound by default-constructed
/// consumers.
///
/// The shared instance is an explicit injection seam, not a hidden global:
/// callers that want different behavior construct their consumer with their
/// own [`GreetingFormatter`] instead.
pub fn shared_formatter() -> Arc<dyn GreetingFormatter> {
    SHARED.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_concatenates_name() {
        let formatter = HelloFormatter::default();
        assert_eq!(formatter.greet("World"), "Hello World");
    }

    #[test]
    fn test_greet_empty_name_is_literal() {
        let formatter = HelloFormatter::default();
        assert_eq!(formatter.greet(""), "Hello ");
    }

    #[test]
    fn test_greet_preserves_whitespace_and_case() {
        let formatter = HelloFormatter::default();
        assert_eq!(formatter.greet("  aLbErT "), "Hello   aLbErT ");
    }

    #[test]
    fn test_greet_handles_non_ascii_names() {
        let formatter = HelloFormatter::default();
        assert_eq!(formatter.greet("Müller"), "Hello Müller");
    }

    #[test]
    fn test_shared_formatter_is_reusable_across_calls() {
        let shared = shared_formatter();
        assert_eq!(shared.greet("once"), "Hello once");
        assert_eq!(shared.greet("twice"), "Hello twice");
    }

    #[test]
    fn test_shared_formatter_returns_one_instance() {
        let a = shared_formatter();
        let b = shared_formatter();
        assert!(
            Arc::ptr_eq(&a, &b),
            "default wiring should hand out the same shared instance"
        );
    }
}
