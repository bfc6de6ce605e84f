//! Compass-heading reconciliation against a fixed target bearing.
//!
//! Runs once per device-orientation event, tens of times per second, so
//! everything here is branch-light arithmetic on two floats.

use serde::{Deserialize, Serialize};
use tracing::trace;

use amal_core::clamp_angle_finite;
use crate::bearing::BearingResult;

/// Alignment is declared within this many degrees of the target.
pub const DEFAULT_TOLERANCE_DEGREES: f64 = 5.0;

/// One normalized reading from the device orientation sensor,
/// degrees from true north in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingSample {
    pub degrees: f64,
}

impl HeadingSample {
    /// From a sensor that reports a compass heading directly
    /// (e.g. `webkitCompassHeading`).
    pub fn from_compass(degrees: f64) -> Self {
        Self {
            degrees: clamp_angle_finite(degrees).rem_euclid(360.0),
        }
    }

    /// From a raw device-orientation `alpha` value, which counts
    /// counter-clockwise: heading = (360 − alpha) mod 360.
    pub fn from_rotation_alpha(alpha: f64) -> Self {
        Self {
            degrees: (360.0 - clamp_angle_finite(alpha)).rem_euclid(360.0),
        }
    }
}

/// Where the current heading stands relative to the target bearing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentState {
    /// Signed difference in (-180, 180]. Positive means the target is to
    /// the left of the current heading, negative to the right; the sign
    /// drives the direction arrow in the UI.
    pub difference_degrees: f64,
    pub is_aligned: bool,
}

/// Reconcile with the default 5-degree tolerance.
pub fn reconcile_heading(target: &BearingResult, sample: HeadingSample) -> AlignmentState {
    reconcile_heading_within(target, sample, DEFAULT_TOLERANCE_DEGREES)
}

/// Reconcile a heading sample against the target bearing.
///
/// `diff = ((sample − target + 540) mod 360) − 180`, remapped into
/// (-180, 180] so the exact antipodal difference resolves to +180 (left).
pub fn reconcile_heading_within(
    target: &BearingResult,
    sample: HeadingSample,
    tolerance_degrees: f64,
) -> AlignmentState {
    let tolerance = clamp_angle_finite(tolerance_degrees).max(0.0);

    let mut diff = (sample.degrees - target.bearing_degrees + 540.0).rem_euclid(360.0) - 180.0;
    if diff <= -180.0 {
        diff += 360.0;
    }

    let state = AlignmentState {
        difference_degrees: diff,
        is_aligned: diff.abs() <= tolerance,
    };
    trace!(
        heading = sample.degrees,
        target = target.bearing_degrees,
        diff = state.difference_degrees,
        aligned = state.is_aligned,
        "reconciled heading sample"
    );
    state
}
