//! Input loaders and parsers for the leave planner.
//!
//! All three inputs are optional and best-effort: a missing file degrades
//! to an empty set or an all-zero policy, and malformed records are skipped
//! per item rather than aborting the run.

mod ics;
mod policy;
mod ranges;

pub use ics::{load_public_holidays, parse_calendar_dates};
pub use policy::{load_policy, parse_policy};
pub use ranges::{load_leave_ranges, parse_leave_ranges};

use chrono::NaiveDate;

/// Parses an 8-digit `YYYYMMDD` date, returning `None` on any defect.
fn parse_yyyymmdd(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y%m%d").ok()
}
