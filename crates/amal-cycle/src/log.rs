//! The persisted cycle record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use amal_core::AmalError;

/// One recorded cycle. `end_date == None` means the cycle is ongoing;
/// the journal guarantees at most one such record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleLog {
    pub id: Uuid,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl CycleLog {
    /// A new ongoing log, as created when the user marks a cycle start.
    pub fn started(start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_date,
            end_date: None,
        }
    }

    /// A historical log with both ends known.
    pub fn closed(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, AmalError> {
        if end_date < start_date {
            return Err(AmalError::Cycle(format!(
                "end date {end_date} precedes start date {start_date}"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            start_date,
            end_date: Some(end_date),
        })
    }

    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// The end used in every calculation: the recorded end, or today for
    /// an ongoing cycle.
    pub fn effective_end(&self, today: NaiveDate) -> NaiveDate {
        self.end_date.unwrap_or(today)
    }

    /// Inclusive length in days; a cycle starting and ending the same day
    /// counts as 1.
    pub fn duration_days(&self, today: NaiveDate) -> i64 {
        (self.effective_end(today) - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn same_day_cycle_lasts_one_day() {
        let log = CycleLog::closed(d(2026, 3, 1), d(2026, 3, 1)).unwrap();
        assert_eq!(log.duration_days(d(2026, 6, 1)), 1);
    }

    #[test]
    fn closed_log_ignores_today() {
        let log = CycleLog::closed(d(2026, 3, 1), d(2026, 3, 6)).unwrap();
        assert_eq!(log.duration_days(d(2026, 3, 2)), 6);
        assert_eq!(log.duration_days(d(2027, 1, 1)), 6);
    }

    #[test]
    fn ongoing_log_runs_to_today() {
        let log = CycleLog::started(d(2026, 3, 1));
        assert!(log.is_ongoing());
        assert_eq!(log.duration_days(d(2026, 3, 1)), 1);
        assert_eq!(log.duration_days(d(2026, 3, 5)), 5);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let err = CycleLog::closed(d(2026, 3, 10), d(2026, 3, 9)).unwrap_err();
        assert!(err.to_string().starts_with("CYCLE/"));
    }
}
