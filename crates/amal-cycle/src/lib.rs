//! Amal Cycle: Menstrual-Cycle Accounting
//!
//! Derives everything the tracker UI shows from a collection of persisted
//! [`CycleLog`] records and "today": cycle duration, a five-phase
//! classification for guidance messaging, and the count of fasting days
//! missed inside the observance window (qadha).
//!
//! The engine itself is pure; [`CycleJournal`] is the one stateful piece,
//! enforcing that at most one log is ongoing at a time.
//!
//! # Example
//!
//! ```
//! use amal_cycle::{CycleJournal, ObservanceWindow};
//! use chrono::NaiveDate;
//!
//! let mut journal = CycleJournal::new();
//! let today = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap();
//! journal.begin_cycle(NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()).unwrap();
//!
//! let window = ObservanceWindow::ramadhan_1447().unwrap();
//! let qadha = journal.missed_fasting_days(today, &window);
//! assert_eq!(qadha.missed_fasting_days, 2); // Feb 19 and 20
//! ```

pub mod journal;
pub mod log;
pub mod phase;
pub mod qadha;

pub use journal::CycleJournal;
pub use log::CycleLog;
pub use phase::{classify_phase, CyclePhase, PhaseAssessment};
pub use qadha::{missed_fasting_days, qadha_overlap_days, ObservanceWindow, QadhaAccounting};
