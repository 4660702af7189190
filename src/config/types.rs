//! Configuration types for the costing policy.
//!
//! This module contains the strongly-typed policy structure deserialized
//! from the YAML configuration file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The cost basis used when computing notional profit.
///
/// Accounting texts disagree on whether notional profit compares work
/// certified against cost of production, or contract price against works
/// cost. Both conventions are supported; the choice is a policy setting,
/// not engine behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotionalProfitBasis {
    /// `work_certified - cost_of_production`.
    #[default]
    WorkCertifiedLessCostOfProduction,
    /// `contract_price - works_cost`.
    ContractPriceLessWorksCost,
}

/// Profit-recognition policy for contract costing.
///
/// The default policy matches the conventional treatment of incomplete
/// contracts: notional profit on a work-certified basis, with two-thirds
/// recognised in proportion to cash received.
///
/// # Example
///
/// ```
/// use costing_engine::config::{CostingPolicy, NotionalProfitBasis};
/// use rust_decimal::Decimal;
///
/// let policy = CostingPolicy::default();
/// assert_eq!(policy.notional_profit_basis, NotionalProfitBasis::WorkCertifiedLessCostOfProduction);
/// let two_thirds = Decimal::from(2) / Decimal::from(3);
/// assert_eq!(policy.recognition_fraction(), two_thirds);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingPolicy {
    /// Which cost stage notional profit is measured against.
    #[serde(default)]
    pub notional_profit_basis: NotionalProfitBasis,
    /// Numerator of the recognition fraction.
    #[serde(default = "default_recognition_numerator")]
    pub recognition_numerator: u32,
    /// Denominator of the recognition fraction. Must be non-zero.
    #[serde(default = "default_recognition_denominator")]
    pub recognition_denominator: u32,
}

fn default_recognition_numerator() -> u32 {
    2
}

fn default_recognition_denominator() -> u32 {
    3
}

impl Default for CostingPolicy {
    fn default() -> Self {
        Self {
            notional_profit_basis: NotionalProfitBasis::default(),
            recognition_numerator: default_recognition_numerator(),
            recognition_denominator: default_recognition_denominator(),
        }
    }
}

impl CostingPolicy {
    /// Returns the recognition fraction as a decimal.
    pub fn recognition_fraction(&self) -> Decimal {
        Decimal::from(self.recognition_numerator) / Decimal::from(self.recognition_denominator)
    }
}

/// Top-level structure of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct PolicyFile {
    /// The costing policy section.
    pub policy: CostingPolicy,
}
