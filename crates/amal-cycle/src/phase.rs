//! Day-index phase classification over an average 28-day cycle model.
//!
//! This is heuristic guidance for the tracker UI, not a medical
//! prediction; the bands and progress formulas are fixed and carry no
//! per-user calibration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::log::CycleLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
    /// Past day 28 with no new cycle recorded.
    AwaitingCycle,
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CyclePhase::Menstrual => write!(f, "MENSTRUAL"),
            CyclePhase::Follicular => write!(f, "FOLLICULAR"),
            CyclePhase::Ovulation => write!(f, "OVULATION"),
            CyclePhase::Luteal => write!(f, "LUTEAL"),
            CyclePhase::AwaitingCycle => write!(f, "AWAITING_CYCLE"),
        }
    }
}

/// Where today falls in the most recent cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseAssessment {
    pub phase: CyclePhase,
    /// 1-based day within the cycle.
    pub day_index: i64,
    /// Position on the UI's 0-100 cycle ring.
    pub progress_percent: f64,
}

/// Classify today against the most recent log.
///
/// An ongoing log forces `Menstrual` regardless of day index. Otherwise
/// the bands are: days 1-7 menstrual, 8-13 follicular, 14-15 ovulation,
/// 16-28 luteal, past 28 awaiting the next cycle. Each band maps onto a
/// quarter of the progress ring except the last, which pins at 100.
pub fn classify_phase(log: &CycleLog, today: NaiveDate) -> PhaseAssessment {
    let day_index = ((today - log.start_date).num_days() + 1).max(1);
    let d = day_index as f64;

    let (phase, progress_percent) = if log.is_ongoing() || day_index <= 7 {
        (CyclePhase::Menstrual, (d / 7.0 * 25.0).min(25.0))
    } else if day_index <= 13 {
        (CyclePhase::Follicular, 25.0 + (d - 7.0) / 6.0 * 25.0)
    } else if day_index <= 15 {
        (CyclePhase::Ovulation, 50.0 + (d - 13.0) / 2.0 * 25.0)
    } else if day_index <= 28 {
        (CyclePhase::Luteal, 75.0 + (d - 15.0) / 13.0 * 25.0)
    } else {
        (CyclePhase::AwaitingCycle, 100.0)
    };

    PhaseAssessment {
        phase,
        day_index,
        progress_percent,
    }
}
