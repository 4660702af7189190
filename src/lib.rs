//! Cost-accounting engine for contract and job costing.
//!
//! This crate computes standard cost-sheet figures (prime cost, works cost,
//! cost of production, cost of sales) and derived contract metrics
//! (material escalation, notional profit, retention money, recognised
//! profit) from itemized cost inputs, for two scenarios: long-duration
//! construction contracts and discrete IT job modules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
