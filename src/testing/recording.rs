//! Recording formatter double with scripted replies and call verification.
//!
//! The double supports the three primitives interaction tests need: script a
//! reply for a specific input, record every call with its input, and verify
//! exact call counts after the fact. A final [`confirm_verified`] sweep
//! catches interactions the test never asserted against.
//!
//! [`confirm_verified`]: RecordingFormatter::confirm_verified

use std::collections::HashMap;
use std::sync::Mutex;

use crate::formatter::GreetingFormatter;

/// One observed formatter invocation.
struct RecordedCall {
    name: String,
    verified: bool,
}

/// Interaction-recording substitute for [`GreetingFormatter`].
///
/// Strict: an input with no scripted reply aborts the test rather than
/// inventing a greeting, so every interaction a test triggers must be
/// declared up front.
///
/// Verification failures abort the enclosing test via `panic!`.
pub struct RecordingFormatter {
    replies: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingFormatter {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script the reply returned when `greet` is called with `name`.
    ///
    /// Scripting the same input again replaces the earlier reply.
    pub fn stub_greeting(&self, name: &str, reply: &str) {
        let mut replies = self.replies.lock().expect("replies poisoned");
        replies.insert(name.to_string(), reply.to_string());
    }

    /// Snapshot of every recorded input, in call order.
    pub fn calls(&self) -> Vec<String> {
        let calls = self.calls.lock().expect("calls poisoned");
        calls.iter().map(|call| call.name.clone()).collect()
    }

    /// Assert that `greet` was called with `name` exactly `times` times.
    ///
    /// On success the matching calls are marked verified; on mismatch the
    /// enclosing test is aborted.
    pub fn verify_greet(&self, name: &str, times: usize) {
        let mut calls = self.calls.lock().expect("calls poisoned");
        let recorded = calls.iter().filter(|call| call.name == name).count();

        if recorded != times {
            panic!(
                "verification failed: expected {} call(s) to greet({:?}), recorded {}",
                times, name, recorded
            );
        }

        for call in calls.iter_mut().filter(|call| call.name == name) {
            call.verified = true;
        }
    }

    /// Assert that every recorded call has been verified.
    ///
    /// Aborts the enclosing test if any interaction was never asserted
    /// against, listing the unverified inputs.
    pub fn confirm_verified(&self) {
        let calls = self.calls.lock().expect("calls poisoned");
        let unverified: Vec<&str> = calls
            .iter()
            .filter(|call| !call.verified)
            .map(|call| call.name.as_str())
            .collect();

        if !unverified.is_empty() {
            panic!("unverified interactions remain: {:?}", unverified);
        }
    }
}

impl Default for RecordingFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingFormatter for RecordingFormatter {
    fn greet(&self, name: &str) -> String {
        let mut calls = self.calls.lock().expect("calls poisoned");
        calls.push(RecordedCall {
            name: name.to_string(),
            verified: false,
        });

        let replies = self.replies.lock().expect("replies poisoned");
        match replies.get(name) {
            Some(reply) => reply.clone(),
            None => panic!("no scripted reply for greet({:?})", name),
        }
    }
}
