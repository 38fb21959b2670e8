//! HTML serialization of the leave-plan report.
//!
//! Produces one self-contained document: inline CSS, a legend for the four
//! colored statuses, the summary blocks, and twelve month grids per shown
//! year. This step is read-only over the data model; all classification
//! happens in [`month_grid`].

use std::collections::BTreeMap;

use crate::models::{DateSet, WorkWeekPattern};

use super::grid::{DayCell, MonthGrid, month_grid};

/// CSS classes for the weekday columns, Monday first.
const WEEKDAY_CLASSES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
/// Column header labels, Monday first.
const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const STYLE: &str = r#"<style>
body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif; }
h1, h2 { margin: 0.5em 0; }
.legend span { display:inline-block; padding:4px 8px; margin-right:8px; border:1px solid #ddd; border-radius:4px; }
table { border-collapse: collapse; margin: 8px; }
th { background:#f0f0f0; }
th, td { border: 1px solid #ddd; padding: 4px; text-align: center; }
.workday { background: #d4edda; }
.public  { background: #e2d1f9; }
.holiday { background: #f8d7da; }
.both    { background: #cfe2ff; }
.noday   { background: #f9f9f9; }
.month-container { display:flex; flex-wrap:wrap; gap: 12px; }
.month-container table { width: 280px; }
.summary { padding: 8px; background: #f6f6f6; border: 1px solid #ddd; border-radius: 4px; }
</style>"#;

/// Renders the full leave-plan document.
///
/// `years` selects which years get month grids and which rows appear in
/// the remaining-by-year block; the day sets and the work-week pattern
/// drive per-day classification.
#[allow(clippy::too_many_arguments)]
pub fn render_document(
    years: &[i32],
    public_holidays: &DateSet,
    leave_dates: &DateSet,
    work_week: &WorkWeekPattern,
    title: &str,
    annual_leave_used: u32,
    remaining_by_year: &BTreeMap<i32, u32>,
    burned: u32,
) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str(STYLE);
    html.push_str("\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));

    html.push_str(&format!(
        "<div class=\"summary\"><strong>Annual leave used:</strong> {annual_leave_used} day(s)</div>\n"
    ));

    html.push_str("<div class=\"legend\">\n");
    html.push_str("<span class=\"workday\">Working day</span>\n");
    html.push_str("<span class=\"public\">Public holiday</span>\n");
    html.push_str("<span class=\"holiday\">Planned leave</span>\n");
    html.push_str("<span class=\"both\">Public holiday + Leave</span>\n");
    html.push_str("</div>\n");

    html.push_str("<div class=\"summary\">\n<strong>Annual leave left:</strong>\n");
    for (year, left) in remaining_by_year {
        html.push_str(&format!("<div>Year {year}: {left} day(s)</div>\n"));
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<div class=\"summary\"><strong>Burned leave (exceeds carry-over cap):</strong> {burned} day(s)</div>\n"
    ));

    for &year in years {
        html.push_str(&format!("<h2>{year}</h2>\n<div class=\"month-container\">\n"));
        for month in 1..=12 {
            let grid = month_grid(year, month, public_holidays, leave_dates, work_week);
            html.push_str(&render_month(&grid));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Serializes one month grid as a table.
fn render_month(grid: &MonthGrid) -> String {
    let mut out = String::new();
    out.push_str("<table class=\"month\">\n");

    let name = MONTH_NAMES
        .get(grid.month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("");
    out.push_str(&format!(
        "<tr><th colspan=\"7\" class=\"month\">{} {}</th></tr>\n",
        name, grid.year
    ));

    out.push_str("<tr>");
    for (class, label) in WEEKDAY_CLASSES.iter().zip(WEEKDAY_LABELS) {
        out.push_str(&format!("<th class=\"{class}\">{label}</th>"));
    }
    out.push_str("</tr>\n");

    for week in &grid.weeks {
        out.push_str("<tr>");
        for (weekday, cell) in week.iter().enumerate() {
            match cell {
                DayCell::Blank => out.push_str("<td class=\"noday\">&nbsp;</td>"),
                DayCell::Day { day, status } => {
                    let base = WEEKDAY_CLASSES[weekday];
                    match status.css_class() {
                        Some(extra) => {
                            out.push_str(&format!("<td class=\"{base} {extra}\">{day}</td>"));
                        }
                        None => out.push_str(&format!("<td class=\"{base}\">{day}</td>")),
                    }
                }
            }
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n");
    out
}

/// Escapes the HTML-significant characters of user-supplied text.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn render_default(years: &[i32], public: &DateSet, leave: &DateSet) -> String {
        render_document(
            years,
            public,
            leave,
            &WorkWeekPattern::default(),
            "Leave Planner",
            0,
            &BTreeMap::new(),
            0,
        )
    }

    #[test]
    fn test_document_skeleton() {
        let html = render_default(&[2025], &DateSet::new(), &DateSet::new());
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Leave Planner</title>"));
        assert!(html.contains("<h1>Leave Planner</h1>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_legend_names_all_four_statuses() {
        let html = render_default(&[2025], &DateSet::new(), &DateSet::new());
        assert!(html.contains("<span class=\"workday\">Working day</span>"));
        assert!(html.contains("<span class=\"public\">Public holiday</span>"));
        assert!(html.contains("<span class=\"holiday\">Planned leave</span>"));
        assert!(html.contains("<span class=\"both\">Public holiday + Leave</span>"));
    }

    #[test]
    fn test_twelve_months_per_year() {
        let html = render_default(&[2025], &DateSet::new(), &DateSet::new());
        assert_eq!(html.matches("<table class=\"month\">").count(), 12);
        assert!(html.contains(">January 2025<"));
        assert!(html.contains(">December 2025<"));
    }

    #[test]
    fn test_two_years_render_twenty_four_months() {
        let html = render_default(&[2025, 2026], &DateSet::new(), &DateSet::new());
        assert_eq!(html.matches("<table class=\"month\">").count(), 24);
        assert!(html.contains("<h2>2025</h2>"));
        assert!(html.contains("<h2>2026</h2>"));
    }

    #[test]
    fn test_day_cells_carry_status_classes() {
        // 2025-01-01 (Wed) public holiday, 2025-01-02 (Thu) leave,
        // 2025-01-03 (Fri) both.
        let public: DateSet = [date(2025, 1, 1), date(2025, 1, 3)].into_iter().collect();
        let leave: DateSet = [date(2025, 1, 2), date(2025, 1, 3)].into_iter().collect();
        let html = render_default(&[2025], &public, &leave);
        assert!(html.contains("<td class=\"wed public\">1</td>"));
        assert!(html.contains("<td class=\"thu holiday\">2</td>"));
        assert!(html.contains("<td class=\"fri both\">3</td>"));
        assert!(html.contains("<td class=\"mon workday\">6</td>"));
        // Sunday the 5th carries no status class.
        assert!(html.contains("<td class=\"sun\">5</td>"));
    }

    #[test]
    fn test_blank_cells_use_noday_class() {
        // January 2025 starts on a Wednesday, so the first row has blanks.
        let html = render_default(&[2025], &DateSet::new(), &DateSet::new());
        assert!(html.contains("<td class=\"noday\">&nbsp;</td>"));
    }

    #[test]
    fn test_summary_blocks() {
        let remaining: BTreeMap<i32, u32> = [(2025, 3), (2026, 19)].into_iter().collect();
        let html = render_document(
            &[2025],
            &DateSet::new(),
            &DateSet::new(),
            &WorkWeekPattern::default(),
            "T",
            2,
            &remaining,
            1,
        );
        assert!(html.contains("<strong>Annual leave used:</strong> 2 day(s)"));
        assert!(html.contains("<div>Year 2025: 3 day(s)</div>"));
        assert!(html.contains("<div>Year 2026: 19 day(s)</div>"));
        assert!(html.contains("<strong>Burned leave (exceeds carry-over cap):</strong> 1 day(s)"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_document(
            &[],
            &DateSet::new(),
            &DateSet::new(),
            &WorkWeekPattern::default(),
            "R&D <plan>",
            0,
            &BTreeMap::new(),
            0,
        );
        assert!(html.contains("<title>R&amp;D &lt;plan&gt;</title>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b<c>\"d\""), "a&amp;b&lt;c&gt;&quot;d&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
