//! Costing policy configuration.
//!
//! The two observed profit-recognition conventions are expressed as a
//! policy loaded from YAML rather than hard-coded into the calculator.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{CostingPolicy, NotionalProfitBasis};
