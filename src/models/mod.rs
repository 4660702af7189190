//! Core data models for the costing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contract;
mod costing_result;
mod job;
mod line_item;

pub use contract::{ContractAccounts, ContractBreakdown, ContractCosting, ContractMetrics};
pub use costing_result::{ContractCostingResult, JobCostingResult};
pub use job::{JobCosting, JobModule, JobModuleBreakdown};
pub use line_item::LineItem;
