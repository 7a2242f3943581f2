//! Test helpers, available with the `test-utils` feature.

use parking_lot::Mutex;

use crate::mapper::sink::{RowErrorSink, RowFailure};

/// Sink that keeps every reported failure in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    failures: Mutex<Vec<RowFailure>>,
}

impl CollectingSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the failures reported so far.
    #[must_use]
    pub fn failures(&self) -> Vec<RowFailure> {
        self.failures.lock().clone()
    }

    /// Number of failures reported so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Drop every recorded failure.
    pub fn clear(&self) {
        self.failures.lock().clear();
    }
}

impl RowErrorSink for CollectingSink {
    fn report(&self, failure: &RowFailure) {
        self.failures.lock().push(failure.clone());
    }
}
