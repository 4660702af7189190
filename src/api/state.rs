//! Application state for the costing engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::CostingPolicy;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently just the profit-recognition policy.
#[derive(Clone)]
pub struct AppState {
    /// The active costing policy.
    policy: Arc<CostingPolicy>,
}

impl AppState {
    /// Creates a new application state with the given policy.
    pub fn new(policy: CostingPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the costing policy.
    pub fn policy(&self) -> &CostingPolicy {
        &self.policy
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CostingPolicy::default())
    }
}
