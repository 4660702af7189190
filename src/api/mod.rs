//! HTTP API module for the costing engine.
//!
//! This module provides the REST endpoints for the contract and job
//! costing simulations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ContractCostingRequest, JobCostingRequest, JobModuleRequest};
pub use response::ApiError;
pub use state::AppState;
