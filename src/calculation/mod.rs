//! Calculation logic for the costing engine.
//!
//! This module contains the pure calculation functions: line-item
//! summation, percentage application, the contract cost-sheet and its
//! derived metrics, and the per-module job costing chain. Every function
//! here is total, deterministic, and free of I/O.

mod contract;
mod job;
mod line_items;
mod percentage;

pub use contract::{
    build_contract_breakdown, calculate_contract_costing, material_escalation, notional_profit,
    recognised_profit, retention_money,
};
pub use job::{calculate_job_costing, calculate_module, overhead_amount};
pub use line_items::sum_line_items;
pub use percentage::percent_of;
