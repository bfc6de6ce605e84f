//! Amal Qibla: Bearing Computation and Compass Reconciliation
//!
//! Computes the initial great-circle bearing from an observer to the Kaaba
//! and classifies, on every device-orientation event, whether the current
//! compass heading matches that bearing within tolerance.
//!
//! # Example
//!
//! ```
//! use amal_qibla::{compute_bearing, reconcile_heading, Coordinate, HeadingSample};
//!
//! // Jakarta
//! let observer = Coordinate::new(-6.2, 106.8).unwrap();
//! let target = compute_bearing(&observer);
//!
//! let state = reconcile_heading(&target, HeadingSample::from_compass(target.bearing_degrees));
//! assert!(state.is_aligned);
//! ```

pub mod bearing;
pub mod heading;

pub use bearing::{bearing_between, compute_bearing, BearingResult, Coordinate, KAABA};
pub use heading::{
    reconcile_heading, reconcile_heading_within, AlignmentState, HeadingSample,
    DEFAULT_TOLERANCE_DEGREES,
};
