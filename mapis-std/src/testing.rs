//! Testing utilities for mapis.
//!
//! Handlers that observe how they were dispatched to, so tests can assert on
//! routing without writing bespoke closures.
//!
//! - [`RecordingHandler`]: records every value and argument tuple it receives
//! - [`CountingHandler`]: counts invocations

use mapis_core::Handler;
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records each call and returns a fixed output.
///
/// Clones share the same record, so a clone can be registered while the
/// original is kept for inspection.
///
/// # Example
///
/// ```rust,ignore
/// let circle = RecordingHandler::<Value, (), &str>::new("circle");
/// let dispatcher = DispatcherBuilder::new()
///     .path(["kind"])
///     .on("circle", circle.clone())
///     .build()?;
///
/// dispatcher.dispatch(&json!({"kind": "circle"}), ())?;
/// assert_eq!(circle.count(), 1);
/// ```
pub struct RecordingHandler<T: Clone, Args: Clone, R: Clone> {
    calls: Arc<Mutex<Vec<(T, Args)>>>,
    output: R,
}

impl<T: Clone, Args: Clone, R: Clone> RecordingHandler<T, Args, R> {
    /// Create a recording handler that returns `output` on every call.
    pub fn new(output: R) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            output,
        }
    }

    /// Get a clone of the recorded calls, oldest first.
    pub fn calls(&self) -> Vec<(T, Args)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<T: Clone, Args: Clone, R: Clone> Clone for RecordingHandler<T, Args, R> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
            output: self.output.clone(),
        }
    }
}

impl<T: Clone, Args: Clone, R: Clone> Handler<T, Args> for RecordingHandler<T, Args, R> {
    type Output = R;

    fn call(&self, value: &T, args: Args) -> R {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((value.clone(), args));
        self.output.clone()
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations and returns the new count.
///
/// Accepts any value type and any extra arguments.
#[derive(Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<T: ?Sized, Args> Handler<T, Args> for CountingHandler {
    type Output = usize;

    fn call(&self, _value: &T, _args: Args) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_handler_shares_record() {
        let recorder = RecordingHandler::<u8, (String,), bool>::new(true);
        let registered = recorder.clone();

        assert!(registered.call(&1, ("a".to_string(),)));
        assert!(registered.call(&2, ("b".to_string(),)));

        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.calls()[1], (2, ("b".to_string(),)));

        recorder.clear();
        assert_eq!(registered.count(), 0);
    }

    #[test]
    fn test_counting_handler_accepts_anything() {
        let counter = CountingHandler::new();
        assert_eq!(Handler::<str, ()>::call(&counter, "x", ()), 1);
        assert_eq!(Handler::<u8, (u8, u8)>::call(&counter, &0, (1, 2)), 2);
        assert_eq!(counter.count(), 2);

        counter.reset();
        assert_eq!(counter.count(), 0);
    }
}
