//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::engine::PayrollEngine;

/// Shared application state.
///
/// Holds the payroll engine; the engine itself keeps no state between
/// runs, so sharing it across requests needs no locking.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<PayrollEngine>,
}

impl AppState {
    /// Creates a new application state around the given engine.
    pub fn new(engine: PayrollEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a shared handle to the payroll engine.
    pub fn engine(&self) -> Arc<PayrollEngine> {
        Arc::clone(&self.engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }
}
