//! Numeric normalization at the UI boundary.
//!
//! Form fields arrive as free text: blank means zero, negative values are
//! meaningless for every calculator and clamp to zero, and anything else
//! that fails to parse is a user-visible input error naming the field.
//! The engines themselves only ever see the typed, clamped values.

use rust_decimal::Decimal;

use crate::error::AmalError;

/// Parse a currency/weight form field into a non-negative `Decimal`.
///
/// Blank input is zero. Negative input clamps to zero. Malformed text is
/// an `INPUT/` error carrying the field name for the UI to surface.
pub fn parse_amount(field: &str, raw: &str) -> Result<Decimal, AmalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value: Decimal = trimmed
        .parse()
        .map_err(|_| AmalError::Input(format!("{field}: not a number: {trimmed:?}")))?;
    Ok(clamp_non_negative(value))
}

/// Parse a whole-number form field (e.g. a souls count).
///
/// Same rules as [`parse_amount`]: blank is zero, malformed text errors.
/// A leading minus sign fails the `u32` parse and is reported as malformed
/// rather than silently clamped, since a negative count is never a
/// plausible keystroke-in-progress.
pub fn parse_count(field: &str, raw: &str) -> Result<u32, AmalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| AmalError::Input(format!("{field}: not a whole number: {trimmed:?}")))
}

/// Clamp a decimal to zero when negative.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::ZERO
    } else {
        value
    }
}

/// Coerce a non-finite angle to zero.
///
/// Sensor streams occasionally deliver NaN on the first event after a
/// permission grant; the calculators stay total by mapping it to zero.
pub fn clamp_angle_finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
