//! Result envelopes returned to API callers.
//!
//! Each envelope wraps a pure calculation output with a calculation id,
//! timestamp, and engine version so responses can be correlated with logs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContractBreakdown, ContractMetrics, JobModuleBreakdown};

/// The complete result of a contract costing simulation.
///
/// # Example
///
/// ```
/// use costing_engine::calculation::calculate_contract_costing;
/// use costing_engine::config::CostingPolicy;
/// use costing_engine::models::{ContractAccounts, ContractCostingResult};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let costing = calculate_contract_costing(&ContractAccounts::default(), &CostingPolicy::default());
/// let result = ContractCostingResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: env!("CARGO_PKG_VERSION").to_string(),
///     breakdown: costing.breakdown,
///     contract_metrics: costing.contract_metrics,
/// };
/// assert_eq!(result.breakdown.prime_cost, rust_decimal::Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCostingResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The four-stage cost-sheet breakdown.
    pub breakdown: ContractBreakdown,
    /// The derived contract metrics.
    pub contract_metrics: ContractMetrics,
}

/// The complete result of a job costing simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCostingResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Per-module breakdowns, in input order.
    pub breakdown: Vec<JobModuleBreakdown>,
    /// Sum of every module's total cost.
    pub grand_total: Decimal,
    /// Sum of every module's selling price.
    pub grand_price: Decimal,
}
