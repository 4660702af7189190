//! Job costing calculation functionality.
//!
//! Each job module gets its own cost-sheet chain: prime cost from the
//! itemized direct costs, then percentage overheads compounding on the
//! running stage total, then profit on total cost. Project-level grand
//! totals are summed after all modules are processed.

use rust_decimal::Decimal;

use crate::models::{JobCosting, JobModule, JobModuleBreakdown};

use super::line_items::sum_line_items;
use super::percentage::percent_of;

/// Applies an optional overhead/profit percentage to a stage total.
///
/// An absent percentage and an explicit zero are equivalent: both yield
/// exactly zero. The stage itself is still computed, preserving the
/// additive chain.
///
/// # Examples
///
/// ```
/// use costing_engine::calculation::overhead_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(overhead_amount(Decimal::from(395_000), Some(Decimal::from(10))), Decimal::from(39_500));
/// assert_eq!(overhead_amount(Decimal::from(395_000), None), Decimal::ZERO);
/// assert_eq!(overhead_amount(Decimal::from(395_000), Some(Decimal::ZERO)), Decimal::ZERO);
/// ```
pub fn overhead_amount(base: Decimal, percent: Option<Decimal>) -> Decimal {
    percent_of(base, percent.unwrap_or(Decimal::ZERO))
}

/// Computes the full cost breakdown for one job module.
///
/// Overheads compound: factory overhead applies to prime cost, admin
/// overhead to works cost, selling overhead to cost of production, and
/// profit to total cost. This mirrors the contract cost sheet at module
/// granularity.
///
/// # Examples
///
/// ```
/// use costing_engine::calculation::calculate_module;
/// use costing_engine::models::{JobModule, LineItem};
/// use rust_decimal::Decimal;
///
/// let module = JobModule {
///     name: "Attendance".to_string(),
///     materials: vec![LineItem { name: "License".to_string(), amount: Decimal::from(45_000) }],
///     labour: vec![LineItem { name: "Dev Team".to_string(), amount: Decimal::from(300_000) }],
///     expenses: vec![LineItem { name: "Hosting".to_string(), amount: Decimal::from(50_000) }],
///     factory_overhead_percent: Some(Decimal::from(10)),
///     admin_overhead_percent: Some(Decimal::from(5)),
///     profit_percent: Some(Decimal::from(20)),
///     ..JobModule::default()
/// };
///
/// let breakdown = calculate_module(&module);
/// assert_eq!(breakdown.prime_cost, Decimal::from(395_000));
/// assert_eq!(breakdown.selling_price, Decimal::from(547_470));
/// ```
pub fn calculate_module(module: &JobModule) -> JobModuleBreakdown {
    let direct_material = sum_line_items(&module.materials);
    let direct_labour = sum_line_items(&module.labour);
    let direct_expenses = sum_line_items(&module.expenses);
    let prime_cost = direct_material + direct_labour + direct_expenses;

    let factory_overhead = overhead_amount(prime_cost, module.factory_overhead_percent);
    let works_cost = prime_cost + factory_overhead;

    let admin_overhead = overhead_amount(works_cost, module.admin_overhead_percent);
    let cost_of_production = works_cost + admin_overhead;

    let selling_overhead = overhead_amount(cost_of_production, module.selling_overhead_percent);
    let total_cost = cost_of_production + selling_overhead;

    let profit = overhead_amount(total_cost, module.profit_percent);
    let selling_price = total_cost + profit;

    JobModuleBreakdown {
        name: module.name.clone(),
        direct_material,
        direct_labour,
        direct_expenses,
        prime_cost,
        factory_overhead,
        works_cost,
        admin_overhead,
        cost_of_production,
        selling_overhead,
        total_cost,
        profit,
        selling_price,
    }
}

/// Runs the job costing calculation over a sequence of modules.
///
/// Module order is preserved in the output. Grand totals are computed
/// after all modules are processed; an empty input yields an empty
/// breakdown with zero totals.
pub fn calculate_job_costing(modules: &[JobModule]) -> JobCosting {
    let breakdown: Vec<JobModuleBreakdown> = modules.iter().map(calculate_module).collect();

    let grand_total: Decimal = breakdown.iter().map(|b| b.total_cost).sum();
    let grand_price: Decimal = breakdown.iter().map(|b| b.selling_price).sum();

    JobCosting {
        breakdown,
        grand_total,
        grand_price,
    }
}
