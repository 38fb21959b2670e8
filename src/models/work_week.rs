//! Work-week pattern model.

use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Declares which weekdays are nominally working days.
///
/// The pattern holds exactly 7 flags indexed Monday..Sunday. It is parsed
/// from a 7-character string of `0`/`1` (e.g. `1111100` for Mon-Fri);
/// anything else is a fatal configuration error.
///
/// # Example
///
/// ```
/// use leave_planner::models::WorkWeekPattern;
/// use chrono::Weekday;
///
/// let pattern: WorkWeekPattern = "1111100".parse().unwrap();
/// assert!(pattern.is_working_day(Weekday::Fri));
/// assert!(!pattern.is_working_day(Weekday::Sat));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWeekPattern {
    /// One flag per weekday, Monday first.
    days: [bool; 7],
}

impl WorkWeekPattern {
    /// Returns whether the given weekday is flagged as a working day.
    pub fn is_working_day(&self, weekday: Weekday) -> bool {
        self.days[weekday.num_days_from_monday() as usize]
    }
}

impl Default for WorkWeekPattern {
    /// Monday through Friday working, weekend off (`1111100`).
    fn default() -> Self {
        Self {
            days: [true, true, true, true, true, false, false],
        }
    }
}

impl FromStr for WorkWeekPattern {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 7 || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(PlannerError::InvalidWorkWeek {
                pattern: s.to_string(),
            });
        }
        let mut days = [false; 7];
        for (day, byte) in days.iter_mut().zip(s.bytes()) {
            *day = byte == b'1';
        }
        Ok(Self { days })
    }
}
