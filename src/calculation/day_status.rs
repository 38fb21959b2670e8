//! Day-status classification.
//!
//! Resolves each calendar date to exactly one display status from its
//! membership in the public-holiday and leave sets and the work-week
//! pattern. The precedence order makes a public-holiday/leave overlap
//! visually distinguishable from either alone, and lets public-holiday
//! status dominate a coincidental leave booking.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{DateSet, WorkWeekPattern};

/// The display status of a single calendar day.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::DayStatus;
///
/// assert_eq!(DayStatus::Both.css_class(), Some("both"));
/// assert_eq!(DayStatus::None.css_class(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Both a public holiday and planned leave.
    Both,
    /// A public holiday only.
    Public,
    /// Planned leave only.
    Holiday,
    /// A working weekday with nothing booked.
    Workday,
    /// A non-working day with nothing booked; no distinguishing visual class.
    None,
}

impl DayStatus {
    /// Returns the CSS class for this status, or `None` for unmarked days.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            DayStatus::Both => Some("both"),
            DayStatus::Public => Some("public"),
            DayStatus::Holiday => Some("holiday"),
            DayStatus::Workday => Some("workday"),
            DayStatus::None => None,
        }
    }
}

/// Classifies a date by fixed precedence, first match wins:
/// both > public > holiday (planned leave) > workday > none.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::{DayStatus, classify_day};
/// use leave_planner::models::{DateSet, WorkWeekPattern};
/// use chrono::NaiveDate;
///
/// let mut public = DateSet::new();
/// public.insert(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// let leave = DateSet::new();
/// let pattern = WorkWeekPattern::default();
///
/// let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(classify_day(new_year, &public, &leave, &pattern), DayStatus::Public);
/// ```
pub fn classify_day(
    date: NaiveDate,
    public_holidays: &DateSet,
    leave_dates: &DateSet,
    work_week: &WorkWeekPattern,
) -> DayStatus {
    let is_public = public_holidays.contains(&date);
    let is_leave = leave_dates.contains(&date);

    if is_public && is_leave {
        DayStatus::Both
    } else if is_public {
        DayStatus::Public
    } else if is_leave {
        DayStatus::Holiday
    } else if work_week.is_working_day(date.weekday()) {
        DayStatus::Workday
    } else {
        DayStatus::None
    }
}
