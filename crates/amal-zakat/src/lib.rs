//! Amal Zakat: Nisab-Gated Obligation Calculators
//!
//! Four independent calculators sharing one nisab-plus-rate pattern:
//!
//! - **Fitrah** — per-soul staple-food levy, no nisab gate.
//! - **Maal** — liquid wealth gated against the gold nisab by currency value.
//! - **Income** — gated on the yearly projection, paid as a monthly installment.
//! - **Precious metals** — gold and silver gated independently by raw weight.
//!
//! Every calculator is total: inputs are clamped non-negative on entry and
//! the result is recomputed on each keystroke by the consuming form.
//!
//! # Example
//!
//! ```
//! use amal_zakat::{calculate_maal, MaalAssets, ZakatConfig};
//! use rust_decimal_macros::dec;
//!
//! let config = ZakatConfig::default();
//! let assets = MaalAssets::new(dec!(90_000_000), dec!(10_000_000), dec!(0));
//! let verdict = calculate_maal(&assets, dec!(1_000_000), &config);
//!
//! assert!(verdict.is_obligatory);
//! assert_eq!(verdict.payable_amount, dec!(2_500_000));
//! ```

pub mod config;
pub mod fitrah;
pub mod income;
pub mod maal;
pub mod precious_metals;
pub mod verdict;

pub use config::ZakatConfig;
pub use fitrah::{calculate_fitrah, FitrahResult};
pub use income::{calculate_income, IncomeVerdict};
pub use maal::{calculate_maal, MaalAssets};
pub use precious_metals::{calculate_precious_metals, MetalHolding, PreciousMetalsVerdict};
pub use verdict::ZakatVerdict;
