//! Income zakat with its deliberate cadence asymmetry: the obligation gate
//! evaluates the *yearly* projection against the gold nisab, while the
//! payable amount is the *monthly* installment. Both sides of that
//! asymmetry are load-bearing and pinned by tests.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use amal_core::clamp_non_negative;
use crate::config::ZakatConfig;

/// A [`crate::ZakatVerdict`] extended with the projection the gate ran on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeVerdict {
    /// Salary plus other income for one month.
    pub total_monthly: Decimal,
    /// Twelve-month projection; this is what faces the nisab.
    pub total_yearly: Decimal,
    pub nisab_threshold: Decimal,
    pub is_obligatory: bool,
    /// Monthly installment, not the yearly figure.
    pub payable_amount: Decimal,
}

pub fn calculate_income(
    monthly_salary: Decimal,
    monthly_other: Decimal,
    gold_price_per_gram: Decimal,
    config: &ZakatConfig,
) -> IncomeVerdict {
    let total_monthly = clamp_non_negative(monthly_salary) + clamp_non_negative(monthly_other);
    let total_yearly = total_monthly * dec!(12);
    let nisab_threshold = config.gold_nisab_value(clamp_non_negative(gold_price_per_gram));

    let is_obligatory = total_yearly >= nisab_threshold;
    let payable_amount = if is_obligatory {
        total_monthly * config.rate
    } else {
        Decimal::ZERO
    };
    debug!(%total_yearly, %nisab_threshold, is_obligatory, "income zakat verdict");

    IncomeVerdict {
        total_monthly,
        total_yearly,
        nisab_threshold,
        is_obligatory,
        payable_amount,
    }
}
