//! Annual-leave usage counting.
//!
//! A leave date counts as used annual leave iff its weekday is flagged
//! working in the work-week pattern and it is not a public holiday. The
//! by-year map is the canonical computation; the aggregate count is the
//! sum of its values, so the two can never drift apart.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::models::{DateSet, WorkWeekPattern};

/// Counts used annual-leave days grouped by calendar year.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::usage_by_year;
/// use leave_planner::models::{DateSet, WorkWeekPattern};
/// use chrono::NaiveDate;
///
/// // 2025-01-06 is a Monday, 2025-01-04 a Saturday.
/// let leave: DateSet = [
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(),
/// ]
/// .into_iter()
/// .collect();
///
/// let used = usage_by_year(&leave, &DateSet::new(), &WorkWeekPattern::default());
/// assert_eq!(used[&2025], 1); // the Saturday does not count
/// ```
pub fn usage_by_year(
    leave_dates: &DateSet,
    public_holidays: &DateSet,
    work_week: &WorkWeekPattern,
) -> BTreeMap<i32, u32> {
    let mut used = BTreeMap::new();
    for date in leave_dates {
        if work_week.is_working_day(date.weekday()) && !public_holidays.contains(date) {
            *used.entry(date.year()).or_insert(0) += 1;
        }
    }
    used
}

/// Counts used annual-leave days across all years.
///
/// Derived from [`usage_by_year`] rather than computed independently.
pub fn annual_leave_used(
    leave_dates: &DateSet,
    public_holidays: &DateSet,
    work_week: &WorkWeekPattern,
) -> u32 {
    usage_by_year(leave_dates, public_holidays, work_week)
        .values()
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn set(dates: &[NaiveDate]) -> DateSet {
        dates.iter().copied().collect()
    }

    #[test]
    fn test_weekday_leave_counts() {
        // 2025-01-06 Monday, 2025-01-07 Tuesday
        let leave = set(&[date(2025, 1, 6), date(2025, 1, 7)]);
        let used = usage_by_year(&leave, &DateSet::new(), &WorkWeekPattern::default());
        assert_eq!(used[&2025], 2);
    }

    #[test]
    fn test_saturday_leave_does_not_count() {
        // 2025-01-04 is a Saturday
        let leave = set(&[date(2025, 1, 4)]);
        let used = usage_by_year(&leave, &DateSet::new(), &WorkWeekPattern::default());
        assert!(used.is_empty());
    }

    #[test]
    fn test_public_holiday_leave_does_not_count() {
        // 2025-01-01 is a Wednesday but also a public holiday
        let day = date(2025, 1, 1);
        let leave = set(&[day]);
        let public = set(&[day]);
        let used = usage_by_year(&leave, &public, &WorkWeekPattern::default());
        assert!(used.is_empty());
    }

    #[test]
    fn test_usage_grouped_by_year() {
        // 2024-12-30 Monday and 2025-01-02 Thursday
        let leave = set(&[date(2024, 12, 30), date(2025, 1, 2)]);
        let used = usage_by_year(&leave, &DateSet::new(), &WorkWeekPattern::default());
        assert_eq!(used[&2024], 1);
        assert_eq!(used[&2025], 1);
    }

    #[test]
    fn test_aggregate_equals_sum_of_by_year() {
        let leave = set(&[
            date(2024, 12, 30),
            date(2025, 1, 2),
            date(2025, 1, 3),
            date(2025, 1, 4), // Saturday, excluded
        ]);
        let public = DateSet::new();
        let pattern = WorkWeekPattern::default();
        let by_year = usage_by_year(&leave, &public, &pattern);
        assert_eq!(
            annual_leave_used(&leave, &public, &pattern),
            by_year.values().sum::<u32>()
        );
        assert_eq!(annual_leave_used(&leave, &public, &pattern), 3);
    }

    #[test]
    fn test_saturday_counts_under_six_day_week() {
        let pattern: WorkWeekPattern = "1111110".parse().unwrap();
        let leave = set(&[date(2025, 1, 4)]); // Saturday
        let used = usage_by_year(&leave, &DateSet::new(), &pattern);
        assert_eq!(used[&2025], 1);
    }

    #[test]
    fn test_empty_leave_set_uses_nothing() {
        assert!(
            usage_by_year(&DateSet::new(), &DateSet::new(), &WorkWeekPattern::default())
                .is_empty()
        );
        assert_eq!(
            annual_leave_used(&DateSet::new(), &DateSet::new(), &WorkWeekPattern::default()),
            0
        );
    }
}
