//! Line item model shared by both costing scenarios.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single named cost entry inside a cost category list.
///
/// The `name` is display-only and never enters the arithmetic. The `amount`
/// is decoded leniently at the request boundary: a missing, null, or
/// non-numeric amount becomes zero rather than an error, so loosely-typed
/// client input never fails a calculation.
///
/// # Example
///
/// ```
/// use costing_engine::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let item = LineItem {
///     name: "Cement".to_string(),
///     amount: Decimal::from(5_500_000),
/// };
/// assert_eq!(item.name, "Cement");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display label for the entry.
    #[serde(default)]
    pub name: String,
    /// Monetary amount; zero when the client sent nothing usable.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Decimal,
}

/// Decodes an amount field, coercing anything non-numeric to zero.
///
/// Accepts JSON numbers and numeric strings. Null, booleans, arrays,
/// objects, and unparseable strings all decode as zero.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value))
}

fn coerce_amount(value: &serde_json::Value) -> Decimal {
    use std::str::FromStr;

    let text = match value {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.trim().to_string(),
        _ => return Decimal::ZERO,
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .unwrap_or(Decimal::ZERO)
}
