//! Fitrah: the per-soul levy paid before the end-of-fasting holiday.
//!
//! Fitrah has no nisab gate; whoever asks to calculate it owes it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use amal_core::clamp_non_negative;
use crate::config::ZakatConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitrahResult {
    /// Total rice-equivalent owed across the household.
    pub rice_kg: Decimal,
    /// Monetary value at the local staple-food price.
    pub total_payable: Decimal,
}

/// `rice_kg = souls × kg-per-soul`, `total = rice_kg × price`.
pub fn calculate_fitrah(
    souls_count: u32,
    price_per_kg: Decimal,
    config: &ZakatConfig,
) -> FitrahResult {
    let price = clamp_non_negative(price_per_kg);
    let rice_kg = Decimal::from(souls_count) * config.fitrah_kg_per_soul;
    FitrahResult {
        rice_kg,
        total_payable: rice_kg * price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn scales_linearly_with_souls() {
        let config = ZakatConfig::default();
        let result = calculate_fitrah(4, dec!(15_000), &config);
        assert_eq!(result.rice_kg, dec!(10));
        assert_eq!(result.total_payable, dec!(150_000));

        let single = calculate_fitrah(1, dec!(15_000), &config);
        assert_eq!(single.total_payable * dec!(4), result.total_payable);
    }

    #[test]
    fn zero_souls_owes_nothing() {
        let config = ZakatConfig::default();
        let result = calculate_fitrah(0, dec!(15_000), &config);
        assert_eq!(result.rice_kg, Decimal::ZERO);
        assert_eq!(result.total_payable, Decimal::ZERO);
    }

    #[test]
    fn negative_price_is_treated_as_zero() {
        let config = ZakatConfig::default();
        let result = calculate_fitrah(3, dec!(-15_000), &config);
        assert_eq!(result.rice_kg, dec!(7.5));
        assert_eq!(result.total_payable, Decimal::ZERO);
    }
}
