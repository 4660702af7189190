//! Percentage application functionality.

use rust_decimal::Decimal;

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Applies a percentage to an amount.
///
/// Returns `amount * percent / 100`. Both calculators funnel every
/// percentage-derived figure (escalation, retention, overheads, profit)
/// through this function.
///
/// # Examples
///
/// ```
/// use costing_engine::calculation::percent_of;
/// use rust_decimal::Decimal;
///
/// let escalation = percent_of(Decimal::from(7_000_000), Decimal::from(5));
/// assert_eq!(escalation, Decimal::from(350_000));
/// ```
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / ONE_HUNDRED
}
