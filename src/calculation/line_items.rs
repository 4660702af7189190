//! Line-item summation functionality.
//!
//! Every category total in both calculators is produced by this one
//! helper, so the lenient treatment of client input stays in one place:
//! amounts that could not be decoded as numbers arrive here as zero (see
//! [`LineItem`]), and an absent list appears as an empty slice.

use rust_decimal::Decimal;

use crate::models::LineItem;

/// Sums the amounts of a sequence of line items.
///
/// An empty slice sums to zero. This function never fails; any leniency
/// for malformed amounts is applied when the items are decoded, so by the
/// time they reach this function every amount is a well-defined decimal.
///
/// # Examples
///
/// ```
/// use costing_engine::calculation::sum_line_items;
/// use costing_engine::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     LineItem { name: "Cement".to_string(), amount: Decimal::from(5_500_000) },
///     LineItem { name: "Steel".to_string(), amount: Decimal::from(1_500_000) },
/// ];
/// assert_eq!(sum_line_items(&items), Decimal::from(7_000_000));
/// assert_eq!(sum_line_items(&[]), Decimal::ZERO);
/// ```
pub fn sum_line_items(items: &[LineItem]) -> Decimal {
    items.iter().map(|item| item.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn item(name: &str, amount: &str) -> LineItem {
        LineItem {
            name: name.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
        }
    }

    /// SUM-001: empty slice sums to zero
    #[test]
    fn test_empty_slice_sums_to_zero() {
        assert_eq!(sum_line_items(&[]), Decimal::ZERO);
    }

    /// SUM-002: single item sums to its amount
    #[test]
    fn test_single_item() {
        let items = [item("Cement", "5500000")];
        assert_eq!(sum_line_items(&items), Decimal::from(5_500_000));
    }

    /// SUM-003: multiple items sum exactly
    #[test]
    fn test_multiple_items() {
        let items = [item("Cement", "5500000"), item("Steel", "1500000")];
        assert_eq!(sum_line_items(&items), Decimal::from(7_000_000));
    }

    /// SUM-004: coerced-to-zero amounts are ignored in the total
    #[test]
    fn test_zero_amounts_do_not_disturb_total() {
        let items = [item("Cement", "100"), item("Unpriced", "0"), item("Steel", "50")];
        assert_eq!(sum_line_items(&items), Decimal::from(150));
    }

    /// SUM-005: fractional amounts sum without float drift
    #[test]
    fn test_fractional_amounts_sum_exactly() {
        let items = [item("A", "0.1"), item("B", "0.2")];
        assert_eq!(sum_line_items(&items), Decimal::from_str("0.3").unwrap());
    }

    /// SUM-006: negative amounts are summed as-is
    #[test]
    fn test_negative_amounts_are_summed() {
        let items = [item("Charge", "100"), item("Credit note", "-40")];
        assert_eq!(sum_line_items(&items), Decimal::from(60));
    }
}
