//! Contract costing calculation functionality.
//!
//! Builds the four-stage cost sheet from itemized accounts and derives the
//! contract metrics: material escalation, notional profit, retention
//! money, and recognised profit under the configured policy.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{CostingPolicy, NotionalProfitBasis};
use crate::models::{ContractAccounts, ContractBreakdown, ContractCosting, ContractMetrics};

use super::line_items::sum_line_items;
use super::percentage::percent_of;

/// Builds the cost-sheet breakdown for a contract.
///
/// Stages are computed in fixed order, each consuming only prior results:
/// prime cost, then works cost, then cost of production, then cost of
/// sales. Each stage is the previous stage plus exactly one
/// overhead-category total.
///
/// # Examples
///
/// ```
/// use costing_engine::calculation::build_contract_breakdown;
/// use costing_engine::models::{ContractAccounts, LineItem};
/// use rust_decimal::Decimal;
///
/// let accounts = ContractAccounts {
///     materials: vec![LineItem { name: "Cement".to_string(), amount: Decimal::from(7_000_000) }],
///     wages: vec![LineItem { name: "Masons".to_string(), amount: Decimal::from(1_500_000) }],
///     factory_overheads: vec![LineItem { name: "Power".to_string(), amount: Decimal::from(200_000) }],
///     ..ContractAccounts::default()
/// };
///
/// let breakdown = build_contract_breakdown(&accounts);
/// assert_eq!(breakdown.prime_cost, Decimal::from(8_500_000));
/// assert_eq!(breakdown.works_cost, Decimal::from(8_700_000));
/// ```
pub fn build_contract_breakdown(accounts: &ContractAccounts) -> ContractBreakdown {
    let direct_materials = sum_line_items(&accounts.materials);
    let direct_wages = sum_line_items(&accounts.wages);
    let direct_expenses = sum_line_items(&accounts.expenses);
    let prime_cost = direct_materials + direct_wages + direct_expenses;

    let factory_overhead_total = sum_line_items(&accounts.factory_overheads);
    let works_cost = prime_cost + factory_overhead_total;

    let admin_overhead_total = sum_line_items(&accounts.admin_overheads);
    let cost_of_production = works_cost + admin_overhead_total;

    let selling_overhead_total = sum_line_items(&accounts.selling_overheads);
    let cost_of_sales = cost_of_production + selling_overhead_total;

    ContractBreakdown {
        direct_materials,
        direct_wages,
        direct_expenses,
        prime_cost,
        factory_overhead_total,
        works_cost,
        admin_overhead_total,
        cost_of_production,
        selling_overhead_total,
        cost_of_sales,
    }
}

/// Computes the escalation allowance on direct materials.
pub fn material_escalation(direct_materials: Decimal, increase_percent: Decimal) -> Decimal {
    percent_of(direct_materials, increase_percent)
}

/// Computes notional profit under the given basis.
///
/// A contract running over its cost basis reports zero notional profit
/// rather than a loss; the result is never negative.
pub fn notional_profit(
    basis: NotionalProfitBasis,
    accounts: &ContractAccounts,
    breakdown: &ContractBreakdown,
) -> Decimal {
    let (value, cost) = match basis {
        NotionalProfitBasis::WorkCertifiedLessCostOfProduction => {
            (accounts.work_certified, breakdown.cost_of_production)
        }
        NotionalProfitBasis::ContractPriceLessWorksCost => {
            (accounts.contract_price, breakdown.works_cost)
        }
    };
    (value - cost).max(Decimal::ZERO)
}

/// Computes retention money withheld from the certified value.
pub fn retention_money(work_certified: Decimal, retention_percent: Decimal) -> Decimal {
    percent_of(work_certified, retention_percent)
}

/// Computes recognised profit, rounded to the nearest whole unit.
///
/// Notional profit is scaled by the recognition fraction and by the ratio
/// of cash received to work certified. When `work_certified` is zero the
/// ratio denominator defaults to 1: the result is degenerate but defined,
/// never a division error.
///
/// # Examples
///
/// ```
/// use costing_engine::calculation::recognised_profit;
/// use rust_decimal::Decimal;
///
/// let two_thirds = Decimal::from(2) / Decimal::from(3);
/// let profit = recognised_profit(
///     Decimal::from(8_150_000),
///     Decimal::from(15_000_000),
///     Decimal::from(18_000_000),
///     two_thirds,
/// );
/// assert_eq!(profit, Decimal::from(4_527_778));
/// ```
pub fn recognised_profit(
    notional_profit: Decimal,
    cash_received: Decimal,
    work_certified: Decimal,
    recognition_fraction: Decimal,
) -> Decimal {
    let certified = if work_certified.is_zero() {
        Decimal::ONE
    } else {
        work_certified
    };
    let unrounded = notional_profit * recognition_fraction * (cash_received / certified);
    unrounded.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Runs the full contract costing calculation.
///
/// Pure and deterministic: identical input always yields identical
/// output, with no I/O or side effects. Missing fields have already
/// defaulted to zero at the request boundary, so this function is total.
pub fn calculate_contract_costing(
    accounts: &ContractAccounts,
    policy: &CostingPolicy,
) -> ContractCosting {
    let breakdown = build_contract_breakdown(accounts);

    let material_escalation =
        material_escalation(breakdown.direct_materials, accounts.materials_increase_percent);
    let notional = notional_profit(policy.notional_profit_basis, accounts, &breakdown);
    let retention = retention_money(accounts.work_certified, accounts.retention_percent);
    let recognised = recognised_profit(
        notional,
        accounts.cash_received,
        accounts.work_certified,
        policy.recognition_fraction(),
    );

    ContractCosting {
        breakdown,
        contract_metrics: ContractMetrics {
            material_escalation,
            notional_profit: notional,
            retention_money: retention,
            recognised_profit: recognised,
        },
    }
}
