//! Pure month-grid construction.
//!
//! Builds a Monday-first week grid for one calendar month, classifying
//! every day and padding the first and last weeks with blank placeholder
//! cells. No HTML is produced here; serialization is a separate step.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calculation::{DayStatus, classify_day};
use crate::models::{DateSet, WorkWeekPattern};

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCell {
    /// A placeholder cell before the first or after the last day of the month.
    Blank,
    /// A day of the month with its classified status.
    Day {
        /// Day of the month, 1-based.
        day: u32,
        /// Display status of the day.
        status: DayStatus,
    },
}

/// A classified month of days in Monday-first week rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// The calendar year.
    pub year: i32,
    /// The calendar month, 1-based.
    pub month: u32,
    /// Week rows, each with exactly 7 cells, Monday first.
    pub weeks: Vec<[DayCell; 7]>,
}

/// Builds the grid for one month from the three input sets.
///
/// Pure with respect to its inputs; an out-of-range month yields a grid
/// with no weeks.
///
/// # Example
///
/// ```
/// use leave_planner::models::{DateSet, WorkWeekPattern};
/// use leave_planner::render::{DayCell, month_grid};
///
/// // September 2025 starts on a Monday.
/// let grid = month_grid(2025, 9, &DateSet::new(), &DateSet::new(), &WorkWeekPattern::default());
/// assert_eq!(grid.weeks.len(), 5);
/// assert!(matches!(grid.weeks[0][0], DayCell::Day { day: 1, .. }));
/// ```
pub fn month_grid(
    year: i32,
    month: u32,
    public_holidays: &DateSet,
    leave_dates: &DateSet,
    work_week: &WorkWeekPattern,
) -> MonthGrid {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthGrid {
            year,
            month,
            weeks: Vec::new(),
        };
    };

    let mut weeks = Vec::new();
    let mut week = [DayCell::Blank; 7];
    let mut column = first.weekday().num_days_from_monday() as usize;

    let mut current = first;
    loop {
        let status = classify_day(current, public_holidays, leave_dates, work_week);
        week[column] = DayCell::Day {
            day: current.day(),
            status,
        };
        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [DayCell::Blank; 7];
            column = 0;
        }

        match current.succ_opt() {
            Some(next) if next.month() == month => current = next,
            _ => break,
        }
    }
    if column > 0 {
        weeks.push(week);
    }

    MonthGrid { year, month, weeks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_grid(year: i32, month: u32) -> MonthGrid {
        month_grid(
            year,
            month,
            &DateSet::new(),
            &DateSet::new(),
            &WorkWeekPattern::default(),
        )
    }

    fn day_count(grid: &MonthGrid) -> usize {
        grid.weeks
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, DayCell::Day { .. }))
            .count()
    }

    #[test]
    fn test_january_2025_layout() {
        // January 2025 starts on a Wednesday and has 31 days.
        let grid = empty_grid(2025, 1);
        assert_eq!(day_count(&grid), 31);
        assert_eq!(grid.weeks[0][0], DayCell::Blank);
        assert_eq!(grid.weeks[0][1], DayCell::Blank);
        assert!(matches!(grid.weeks[0][2], DayCell::Day { day: 1, .. }));
    }

    #[test]
    fn test_february_leap_year() {
        let grid = empty_grid(2024, 2);
        assert_eq!(day_count(&grid), 29);
    }

    #[test]
    fn test_february_non_leap_year() {
        let grid = empty_grid(2025, 2);
        assert_eq!(day_count(&grid), 28);
    }

    #[test]
    fn test_month_starting_on_monday_has_no_leading_blanks() {
        // September 2025 starts on a Monday.
        let grid = empty_grid(2025, 9);
        assert!(matches!(grid.weeks[0][0], DayCell::Day { day: 1, .. }));
    }

    #[test]
    fn test_trailing_week_padded_with_blanks() {
        // November 2025 ends on a Sunday; October 2025 ends on a Friday.
        let grid = empty_grid(2025, 10);
        let last_week = grid.weeks.last().unwrap();
        assert!(matches!(last_week[4], DayCell::Day { day: 31, .. }));
        assert_eq!(last_week[5], DayCell::Blank);
        assert_eq!(last_week[6], DayCell::Blank);
    }

    #[test]
    fn test_every_week_has_seven_cells() {
        for month in 1..=12 {
            let grid = empty_grid(2025, month);
            for week in &grid.weeks {
                assert_eq!(week.len(), 7);
            }
        }
    }

    #[test]
    fn test_statuses_flow_from_classifier() {
        // 2025-01-01 public holiday, 2025-01-02 leave.
        let public: DateSet = [NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()]
            .into_iter()
            .collect();
        let leave: DateSet = [NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()]
            .into_iter()
            .collect();
        let grid = month_grid(2025, 1, &public, &leave, &WorkWeekPattern::default());
        assert_eq!(
            grid.weeks[0][2],
            DayCell::Day {
                day: 1,
                status: DayStatus::Public
            }
        );
        assert_eq!(
            grid.weeks[0][3],
            DayCell::Day {
                day: 2,
                status: DayStatus::Holiday
            }
        );
    }

    #[test]
    fn test_invalid_month_yields_empty_weeks() {
        let grid = empty_grid(2025, 13);
        assert!(grid.weeks.is_empty());
    }
}
