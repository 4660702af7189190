//! Contract costing models.
//!
//! Domain types for the contract scenario: the itemized accounts supplied
//! by the caller, the derived cost-sheet breakdown, and the contract
//! metrics computed from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;

/// Itemized accounts and financial parameters for one contract.
///
/// Every field is optional on the wire; an absent list behaves as empty
/// and an absent scalar behaves as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractAccounts {
    /// Direct material entries.
    pub materials: Vec<LineItem>,
    /// Direct wage entries.
    pub wages: Vec<LineItem>,
    /// Direct expense entries.
    pub expenses: Vec<LineItem>,
    /// Factory/works overhead entries.
    pub factory_overheads: Vec<LineItem>,
    /// Office/administrative overhead entries.
    pub admin_overheads: Vec<LineItem>,
    /// Selling & distribution overhead entries.
    pub selling_overheads: Vec<LineItem>,
    /// Total agreed contract price.
    pub contract_price: Decimal,
    /// Value of work certified by the client to date.
    pub work_certified: Decimal,
    /// Cash actually received against certified work.
    pub cash_received: Decimal,
    /// Percentage of certified value withheld as retention.
    pub retention_percent: Decimal,
    /// Percentage increase applied to direct materials for escalation.
    pub materials_increase_percent: Decimal,
}

/// The four-stage cost-sheet breakdown for a contract.
///
/// Stages are strictly layered: each stage equals the previous stage plus
/// exactly one overhead-category total. No stage is ever computed by
/// skipping an intermediate.
///
/// # Example
///
/// ```
/// use costing_engine::models::ContractBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = ContractBreakdown {
///     direct_materials: Decimal::from(7_000_000),
///     direct_wages: Decimal::from(1_500_000),
///     direct_expenses: Decimal::from(1_000_000),
///     prime_cost: Decimal::from(9_500_000),
///     factory_overhead_total: Decimal::from(200_000),
///     works_cost: Decimal::from(9_700_000),
///     admin_overhead_total: Decimal::from(150_000),
///     cost_of_production: Decimal::from(9_850_000),
///     selling_overhead_total: Decimal::from(50_000),
///     cost_of_sales: Decimal::from(9_900_000),
/// };
/// assert_eq!(breakdown.works_cost, breakdown.prime_cost + breakdown.factory_overhead_total);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractBreakdown {
    /// Sum of direct material entries.
    pub direct_materials: Decimal,
    /// Sum of direct wage entries.
    pub direct_wages: Decimal,
    /// Sum of direct expense entries.
    pub direct_expenses: Decimal,
    /// Direct materials + direct wages + direct expenses.
    pub prime_cost: Decimal,
    /// Sum of factory overhead entries.
    pub factory_overhead_total: Decimal,
    /// Prime cost + factory overheads.
    pub works_cost: Decimal,
    /// Sum of administrative overhead entries.
    pub admin_overhead_total: Decimal,
    /// Works cost + administrative overheads.
    pub cost_of_production: Decimal,
    /// Sum of selling & distribution overhead entries.
    pub selling_overhead_total: Decimal,
    /// Cost of production + selling overheads (total cost).
    pub cost_of_sales: Decimal,
}

/// Contract-specific derived metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractMetrics {
    /// Escalation allowance on direct materials.
    pub material_escalation: Decimal,
    /// Estimated profit on certified work; never negative.
    pub notional_profit: Decimal,
    /// Portion of certified value withheld by the client.
    pub retention_money: Decimal,
    /// Prudently recognised portion of notional profit, rounded to a
    /// whole unit.
    pub recognised_profit: Decimal,
}

/// Complete output of one contract costing calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCosting {
    /// The four-stage cost-sheet breakdown.
    pub breakdown: ContractBreakdown,
    /// The derived contract metrics.
    pub contract_metrics: ContractMetrics,
}
