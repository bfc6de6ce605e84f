//! The shared verdict shape every nisab-gated calculator produces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of one zakat evaluation.
///
/// `payable_amount` is zero whenever the obligation gate fails; the UI
/// renders the threshold either way so the user can see how far off they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZakatVerdict {
    pub total_value: Decimal,
    pub nisab_threshold: Decimal,
    pub is_obligatory: bool,
    pub payable_amount: Decimal,
}

impl ZakatVerdict {
    /// Gate by currency value: obligatory when `total_value` reaches the
    /// threshold (inclusive).
    pub fn evaluate(total_value: Decimal, nisab_threshold: Decimal, rate: Decimal) -> Self {
        Self::gated(total_value >= nisab_threshold, total_value, nisab_threshold, rate)
    }

    /// Build a verdict from an externally-decided gate. Used by the metals
    /// calculator, where the gate compares grams while the reported
    /// threshold stays in currency.
    pub fn gated(
        is_obligatory: bool,
        total_value: Decimal,
        nisab_threshold: Decimal,
        rate: Decimal,
    ) -> Self {
        let payable_amount = if is_obligatory {
            total_value * rate
        } else {
            Decimal::ZERO
        };
        debug!(
            %total_value,
            %nisab_threshold,
            is_obligatory,
            %payable_amount,
            "zakat verdict"
        );
        Self {
            total_value,
            nisab_threshold,
            is_obligatory,
            payable_amount,
        }
    }
}
