//! Resolved run options.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::models::WorkWeekPattern;

/// Which calendar year(s) the report renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum YearSelection {
    /// Only the current wall-clock year.
    Current,
    /// Only the year after the current one.
    Next,
    /// Both the current and the next year.
    Both,
}

impl YearSelection {
    /// Resolves the selection to concrete years, in ascending order.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_planner::config::YearSelection;
    ///
    /// assert_eq!(YearSelection::Both.years(2025), vec![2025, 2026]);
    /// assert_eq!(YearSelection::Next.years(2025), vec![2026]);
    /// ```
    pub fn years(self, current_year: i32) -> Vec<i32> {
        match self {
            YearSelection::Current => vec![current_year],
            YearSelection::Next => vec![current_year + 1],
            YearSelection::Both => vec![current_year, current_year + 1],
        }
    }
}

/// Fully resolved configuration for one planner run.
///
/// All fields have defaults; every input path is optional at run time and
/// degrades to empty or default data when missing.
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory containing `public-holidays-sg-<year>.ics` files.
    pub public_dir: PathBuf,
    /// File listing leave ranges (`YYYYMMDD` or `YYYYMMDD-YYYYMMDD` tokens).
    pub leave_ranges_path: PathBuf,
    /// File with the one-line entitlement policy record.
    pub policy_path: PathBuf,
    /// Which weekdays count as working days.
    pub work_week: WorkWeekPattern,
    /// Where the rendered HTML document is written.
    pub out_path: PathBuf,
    /// Title of the generated HTML page.
    pub title: String,
    /// Which year(s) to render.
    pub show_years: YearSelection,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public-holidays"),
            leave_ranges_path: PathBuf::from("holidays.csv"),
            policy_path: PathBuf::from("leave.csv"),
            work_week: WorkWeekPattern::default(),
            out_path: PathBuf::from("leave_plan.html"),
            title: "Leave Planner".to_string(),
            show_years: YearSelection::Both,
        }
    }
}
