//! Qadha accounting: fasting days missed inside the observance window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use amal_core::AmalError;
use crate::log::CycleLog;

/// The fasting-month date window, inclusive on both ends. Hardcoded
/// per year by the application; injected here so the accounting can be
/// tested against any window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservanceWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ObservanceWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AmalError> {
        if end < start {
            return Err(AmalError::Config(format!(
                "observance window end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Ramadhan 1447 AH: 19 February to 20 March 2026.
    pub fn ramadhan_1447() -> Result<Self, AmalError> {
        let start = NaiveDate::from_ymd_opt(2026, 2, 19)
            .ok_or_else(|| AmalError::Config("bad observance constant".to_string()))?;
        let end = NaiveDate::from_ymd_opt(2026, 3, 20)
            .ok_or_else(|| AmalError::Config("bad observance constant".to_string()))?;
        Self::new(start, end)
    }

    /// Inclusive window length in days.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Days missed to qadha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QadhaAccounting {
    pub missed_fasting_days: i64,
}

/// Whole days of overlap (inclusive both ends) between one log and the
/// window; an ongoing log runs to today. Zero when disjoint.
pub fn qadha_overlap_days(log: &CycleLog, today: NaiveDate, window: &ObservanceWindow) -> i64 {
    let effective_end = log.effective_end(today);
    if effective_end < window.start || log.start_date > window.end {
        return 0;
    }
    let overlap_start = log.start_date.max(window.start);
    let overlap_end = effective_end.min(window.end);
    (overlap_end - overlap_start).num_days() + 1
}

/// Sum the per-log overlaps independently. Logs that overlap each other
/// each contribute their own count; the journal is expected to prevent
/// that situation, and the accounting does not de-duplicate it.
pub fn missed_fasting_days(
    logs: &[CycleLog],
    today: NaiveDate,
    window: &ObservanceWindow,
) -> QadhaAccounting {
    QadhaAccounting {
        missed_fasting_days: logs
            .iter()
            .map(|log| qadha_overlap_days(log, today, window))
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn window() -> ObservanceWindow {
        ObservanceWindow::new(d(2026, 2, 19), d(2026, 3, 20)).unwrap()
    }

    #[test]
    fn cycle_before_the_window_contributes_nothing() {
        let log = CycleLog::closed(d(2026, 1, 5), d(2026, 1, 11)).unwrap();
        assert_eq!(qadha_overlap_days(&log, d(2026, 3, 1), &window()), 0);
    }

    #[test]
    fn cycle_after_the_window_contributes_nothing() {
        let log = CycleLog::closed(d(2026, 4, 2), d(2026, 4, 8)).unwrap();
        assert_eq!(qadha_overlap_days(&log, d(2026, 5, 1), &window()), 0);
    }

    #[test]
    fn partial_overlap_counts_inclusive_days() {
        // Feb 15-20 against a window opening Feb 19: the 19th and 20th.
        let log = CycleLog::closed(d(2026, 2, 15), d(2026, 2, 20)).unwrap();
        assert_eq!(qadha_overlap_days(&log, d(2026, 6, 1), &window()), 2);
    }

    #[test]
    fn containing_cycle_counts_the_full_window() {
        let w = window();
        let log = CycleLog::closed(d(2026, 2, 1), d(2026, 4, 1)).unwrap();
        assert_eq!(qadha_overlap_days(&log, d(2026, 6, 1), &w), w.len_days());
        assert_eq!(w.len_days(), 30);
    }

    #[test]
    fn ongoing_cycle_accrues_through_today() {
        let log = CycleLog::started(d(2026, 3, 18));
        assert_eq!(qadha_overlap_days(&log, d(2026, 3, 19), &window()), 2);
        // Growing day by day, capped at the window end.
        assert_eq!(qadha_overlap_days(&log, d(2026, 3, 25), &window()), 3);
    }

    #[test]
    fn logs_sum_independently() {
        let logs = vec![
            CycleLog::closed(d(2026, 2, 15), d(2026, 2, 20)).unwrap(), // 2 days
            CycleLog::closed(d(2026, 3, 10), d(2026, 3, 14)).unwrap(), // 5 days
            CycleLog::closed(d(2026, 1, 1), d(2026, 1, 7)).unwrap(),   // 0 days
        ];
        let accounting = missed_fasting_days(&logs, d(2026, 6, 1), &window());
        assert_eq!(accounting.missed_fasting_days, 7);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let err = ObservanceWindow::new(d(2026, 3, 20), d(2026, 2, 19)).unwrap_err();
        assert!(err.to_string().starts_with("CONFIG/"));
    }
}
