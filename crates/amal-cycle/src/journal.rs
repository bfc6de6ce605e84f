//! The owning collection of cycle logs and its two-state machine.
//!
//! Tracking is either *idle* (every log closed) or *active* (exactly one
//! ongoing log). `begin_cycle` and `finish_cycle` are the only
//! transitions; both refuse to run from the wrong state so the
//! single-ongoing-log invariant holds at the point of data entry instead
//! of being assumed downstream.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use amal_core::AmalError;
use crate::log::CycleLog;
use crate::phase::{classify_phase, PhaseAssessment};
use crate::qadha::{missed_fasting_days, ObservanceWindow, QadhaAccounting};

/// One user's cycle history, kept ordered by start date descending, the
/// order the history screen renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleJournal {
    logs: Vec<CycleLog>,
}

impl CycleJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from records materialized out of storage.
    pub fn from_logs(mut logs: Vec<CycleLog>) -> Self {
        logs.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Self { logs }
    }

    pub fn logs(&self) -> &[CycleLog] {
        &self.logs
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// The ongoing log, if tracking is in the active state.
    pub fn ongoing(&self) -> Option<&CycleLog> {
        self.logs.iter().find(|log| log.is_ongoing())
    }

    /// The log the phase classifier runs against.
    pub fn most_recent(&self) -> Option<&CycleLog> {
        self.logs.first()
    }

    /// Idle → Active: record a cycle start.
    pub fn begin_cycle(&mut self, start_date: NaiveDate) -> Result<Uuid, AmalError> {
        if let Some(open) = self.ongoing() {
            return Err(AmalError::Cycle(format!(
                "a cycle started {} is still ongoing",
                open.start_date
            )));
        }
        let log = CycleLog::started(start_date);
        let id = log.id;
        debug!(%id, %start_date, "cycle started");
        let at = self
            .logs
            .partition_point(|existing| existing.start_date > start_date);
        self.logs.insert(at, log);
        Ok(id)
    }

    /// Active → Idle: close the ongoing log.
    pub fn finish_cycle(&mut self, end_date: NaiveDate) -> Result<(), AmalError> {
        let open = self
            .logs
            .iter_mut()
            .find(|log| log.is_ongoing())
            .ok_or_else(|| AmalError::Cycle("no ongoing cycle to finish".to_string()))?;
        if end_date < open.start_date {
            return Err(AmalError::Cycle(format!(
                "end date {end_date} precedes start date {}",
                open.start_date
            )));
        }
        open.end_date = Some(end_date);
        debug!(id = %open.id, %end_date, "cycle finished");
        Ok(())
    }

    /// Explicit user deletion. Returns false when the id is unknown.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.logs.len();
        self.logs.retain(|log| log.id != id);
        before != self.logs.len()
    }

    /// Phase assessment for today, or `None` while the journal is empty
    /// (the tracker shows its onboarding card instead).
    pub fn current_phase(&self, today: NaiveDate) -> Option<PhaseAssessment> {
        self.most_recent().map(|log| classify_phase(log, today))
    }

    /// Qadha owed across the whole history.
    pub fn missed_fasting_days(
        &self,
        today: NaiveDate,
        window: &ObservanceWindow,
    ) -> QadhaAccounting {
        missed_fasting_days(&self.logs, today, window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn begin_twice_is_refused() {
        let mut journal = CycleJournal::new();
        journal.begin_cycle(d(2026, 3, 1)).unwrap();
        let err = journal.begin_cycle(d(2026, 3, 3)).unwrap_err();
        assert!(err.to_string().starts_with("CYCLE/"));
        assert_eq!(journal.logs().len(), 1);
    }

    #[test]
    fn finish_without_active_cycle_is_refused() {
        let mut journal = CycleJournal::new();
        assert!(journal.finish_cycle(d(2026, 3, 5)).is_err());

        journal.begin_cycle(d(2026, 3, 1)).unwrap();
        journal.finish_cycle(d(2026, 3, 6)).unwrap();
        assert!(journal.finish_cycle(d(2026, 3, 7)).is_err());
    }

    #[test]
    fn finish_before_start_is_refused() {
        let mut journal = CycleJournal::new();
        journal.begin_cycle(d(2026, 3, 10)).unwrap();
        assert!(journal.finish_cycle(d(2026, 3, 9)).is_err());
        // Still active after the failed transition.
        assert!(journal.ongoing().is_some());
    }

    #[test]
    fn full_idle_active_round_trip() {
        let mut journal = CycleJournal::new();
        assert!(journal.ongoing().is_none());

        let id = journal.begin_cycle(d(2026, 3, 1)).unwrap();
        assert_eq!(journal.ongoing().unwrap().id, id);

        journal.finish_cycle(d(2026, 3, 6)).unwrap();
        assert!(journal.ongoing().is_none());

        // Idle again: a new cycle may start.
        journal.begin_cycle(d(2026, 3, 29)).unwrap();
        assert_eq!(journal.logs().len(), 2);
    }

    #[test]
    fn logs_stay_ordered_newest_first() {
        let mut journal = CycleJournal::new();
        journal.begin_cycle(d(2026, 1, 5)).unwrap();
        journal.finish_cycle(d(2026, 1, 10)).unwrap();
        journal.begin_cycle(d(2026, 3, 1)).unwrap();
        journal.finish_cycle(d(2026, 3, 6)).unwrap();
        journal.begin_cycle(d(2026, 2, 2)).unwrap();

        let starts: Vec<NaiveDate> = journal.logs().iter().map(|l| l.start_date).collect();
        assert_eq!(starts, vec![d(2026, 3, 1), d(2026, 2, 2), d(2026, 1, 5)]);
        assert_eq!(journal.most_recent().unwrap().start_date, d(2026, 3, 1));
    }

    #[test]
    fn remove_deletes_by_id() {
        let mut journal = CycleJournal::new();
        let id = journal.begin_cycle(d(2026, 3, 1)).unwrap();
        assert!(journal.remove(id));
        assert!(journal.is_empty());
        assert!(!journal.remove(id));
    }

    #[test]
    fn empty_journal_has_no_phase() {
        let journal = CycleJournal::new();
        assert!(journal.current_phase(d(2026, 3, 1)).is_none());
    }
}
