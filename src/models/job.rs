//! Job costing models.
//!
//! Domain types for the job scenario: independent job modules with their
//! own itemized direct costs and overhead/profit percentages, and the
//! per-module breakdown derived from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;

/// One independent job module with itemized direct costs and optional
/// overhead/profit percentages.
///
/// A percentage of `None` and an explicit `Some(0)` are equivalent: both
/// yield exactly zero for that stage. The stage is still computed (as
/// zero), preserving the additive chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobModule {
    /// Display name for the module.
    pub name: String,
    /// Direct material entries.
    pub materials: Vec<LineItem>,
    /// Direct labour entries.
    pub labour: Vec<LineItem>,
    /// Direct expense entries.
    pub expenses: Vec<LineItem>,
    /// Factory overhead as a percentage of prime cost.
    pub factory_overhead_percent: Option<Decimal>,
    /// Administrative overhead as a percentage of works cost.
    pub admin_overhead_percent: Option<Decimal>,
    /// Selling overhead as a percentage of cost of production.
    pub selling_overhead_percent: Option<Decimal>,
    /// Profit margin as a percentage of total cost.
    pub profit_percent: Option<Decimal>,
}

/// The full cost breakdown for one job module.
///
/// Overheads compound on the running stage total, mirroring the contract
/// cost sheet at module granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobModuleBreakdown {
    /// Module name, carried through from the input.
    pub name: String,
    /// Sum of direct material entries.
    pub direct_material: Decimal,
    /// Sum of direct labour entries.
    pub direct_labour: Decimal,
    /// Sum of direct expense entries.
    pub direct_expenses: Decimal,
    /// Direct material + direct labour + direct expenses.
    pub prime_cost: Decimal,
    /// Factory overhead applied to prime cost.
    pub factory_overhead: Decimal,
    /// Prime cost + factory overhead.
    pub works_cost: Decimal,
    /// Administrative overhead applied to works cost.
    pub admin_overhead: Decimal,
    /// Works cost + administrative overhead.
    pub cost_of_production: Decimal,
    /// Selling overhead applied to cost of production.
    pub selling_overhead: Decimal,
    /// Cost of production + selling overhead.
    pub total_cost: Decimal,
    /// Profit margin applied to total cost.
    pub profit: Decimal,
    /// Total cost + profit.
    pub selling_price: Decimal,
}

/// Complete output of one job costing calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCosting {
    /// Per-module breakdowns, in input order.
    pub breakdown: Vec<JobModuleBreakdown>,
    /// Sum of every module's total cost.
    pub grand_total: Decimal,
    /// Sum of every module's selling price.
    pub grand_price: Decimal,
}
