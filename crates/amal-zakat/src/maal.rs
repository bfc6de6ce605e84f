//! Maal: zakat on accumulated liquid wealth.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use amal_core::clamp_non_negative;
use crate::config::ZakatConfig;
use crate::verdict::ZakatVerdict;

/// The wealth positions the maal form collects. Each clamps non-negative
/// on construction so partially-filled forms evaluate cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MaalAssets {
    pub cash: Decimal,
    pub investments: Decimal,
    pub receivables: Decimal,
}

impl MaalAssets {
    pub fn new(cash: Decimal, investments: Decimal, receivables: Decimal) -> Self {
        Self {
            cash: clamp_non_negative(cash),
            investments: clamp_non_negative(investments),
            receivables: clamp_non_negative(receivables),
        }
    }

    pub fn total(&self) -> Decimal {
        self.cash + self.investments + self.receivables
    }
}

/// Gate the combined wealth against the currency value of the gold nisab.
/// The comparison is inclusive: wealth exactly at the threshold is
/// obligatory.
pub fn calculate_maal(
    assets: &MaalAssets,
    gold_price_per_gram: Decimal,
    config: &ZakatConfig,
) -> ZakatVerdict {
    let nisab = config.gold_nisab_value(clamp_non_negative(gold_price_per_gram));
    ZakatVerdict::evaluate(assets.total(), nisab, config.rate)
}
