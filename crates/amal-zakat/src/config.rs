//! Zakat rule constants, injected rather than global so tests and future
//! fiqh-policy variants can override them without touching the calculators.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Threshold and rate constants shared by the calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZakatConfig {
    /// Gold nisab in grams; also the basis for the maal and income gates.
    pub gold_nisab_grams: Decimal,

    /// Silver nisab in grams.
    pub silver_nisab_grams: Decimal,

    /// Flat zakat rate applied to every obligatory category.
    pub rate: Decimal,

    /// Rice-equivalent owed per soul for fitrah.
    pub fitrah_kg_per_soul: Decimal,
}

impl Default for ZakatConfig {
    fn default() -> Self {
        Self {
            gold_nisab_grams: dec!(85),
            silver_nisab_grams: dec!(595),
            rate: dec!(0.025),
            fitrah_kg_per_soul: dec!(2.5),
        }
    }
}

impl ZakatConfig {
    /// Currency value of the gold nisab at the given price per gram.
    pub fn gold_nisab_value(&self, gold_price_per_gram: Decimal) -> Decimal {
        self.gold_nisab_grams * gold_price_per_gram
    }

    /// Currency value of the silver nisab at the given price per gram.
    pub fn silver_nisab_value(&self, silver_price_per_gram: Decimal) -> Decimal {
        self.silver_nisab_grams * silver_price_per_gram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        let config = ZakatConfig::default();
        assert_eq!(config.gold_nisab_grams, dec!(85));
        assert_eq!(config.silver_nisab_grams, dec!(595));
        assert_eq!(config.rate, dec!(0.025));
        assert_eq!(config.fitrah_kg_per_soul, dec!(2.5));
    }

    #[test]
    fn nisab_value_scales_with_price() {
        let config = ZakatConfig::default();
        assert_eq!(config.gold_nisab_value(dec!(1_000_000)), dec!(85_000_000));
        assert_eq!(config.silver_nisab_value(dec!(15_000)), dec!(8_925_000));
    }
}
