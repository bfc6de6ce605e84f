//! Gold and silver zakat, each metal evaluated on its own.
//!
//! Unlike maal, the obligation gate here compares raw *grams* held against
//! the nisab weight; the currency-converted nisab appears in the verdict
//! only because that is what the form displays.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use amal_core::clamp_non_negative;
use crate::config::ZakatConfig;
use crate::verdict::ZakatVerdict;

/// Grams held and the market price for one metal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MetalHolding {
    pub grams: Decimal,
    pub price_per_gram: Decimal,
}

impl MetalHolding {
    pub fn new(grams: Decimal, price_per_gram: Decimal) -> Self {
        Self {
            grams: clamp_non_negative(grams),
            price_per_gram: clamp_non_negative(price_per_gram),
        }
    }

    fn value(&self) -> Decimal {
        self.grams * self.price_per_gram
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreciousMetalsVerdict {
    pub gold: ZakatVerdict,
    pub silver: ZakatVerdict,
}

/// Evaluate both metals independently against their nisab weights.
pub fn calculate_precious_metals(
    gold: &MetalHolding,
    silver: &MetalHolding,
    config: &ZakatConfig,
) -> PreciousMetalsVerdict {
    PreciousMetalsVerdict {
        gold: evaluate_metal(gold, config.gold_nisab_grams, config),
        silver: evaluate_metal(silver, config.silver_nisab_grams, config),
    }
}

fn evaluate_metal(holding: &MetalHolding, nisab_grams: Decimal, config: &ZakatConfig) -> ZakatVerdict {
    // Weight gate, currency threshold for display.
    ZakatVerdict::gated(
        holding.grams >= nisab_grams,
        holding.value(),
        nisab_grams * holding.price_per_gram,
        config.rate,
    )
}
