//! Orchestration of a planning run.
//!
//! Wires the loaders, calculators, and renderer together: load the three
//! inputs, derive entitlements and usage, and render the HTML document
//! plus the numeric summary. The reference year is a parameter rather
//! than wall-clock state so runs are deterministic under test; the binary
//! passes today's year.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::calculation::{compute_entitlements, usage_by_year};
use crate::config::Options;
use crate::input::{load_leave_ranges, load_policy, load_public_holidays};
use crate::render::render_document;

/// Numeric summary of a planning run, emitted on the diagnostic channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    /// Leave dates on working days that are not public holidays, all years.
    pub annual_leave_used: u32,
    /// Entitlement minus usage per shown year, floored at zero.
    pub remaining_by_year: BTreeMap<i32, u32>,
    /// Carry-over forfeited to the cap, net of current-year usage.
    pub burned: u32,
}

impl PlanSummary {
    /// Formats the summary as plain-text lines, one metric per line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Annual leave used: {} day(s)",
            self.annual_leave_used
        )];
        for (year, left) in &self.remaining_by_year {
            lines.push(format!("Annual leave left ({year}): {left} day(s)"));
        }
        lines.push(format!(
            "Burned leave (exceeds carry-over cap): {} day(s)",
            self.burned
        ));
        lines
    }
}

/// A fully rendered plan: the HTML document plus its numeric summary.
#[derive(Debug, Clone)]
pub struct Plan {
    /// The self-contained HTML report.
    pub html: String,
    /// The metrics reported alongside the document.
    pub summary: PlanSummary,
}

/// Runs the full pipeline for one configuration.
///
/// `current_year` is the run's reference year; the report covers it and/or
/// the following year per `options.show_years`. Missing input files
/// degrade to empty or default data, so this never fails.
pub fn build_plan(options: &Options, current_year: i32) -> Plan {
    let public_holidays = load_public_holidays(&options.public_dir);
    let leave_dates = load_leave_ranges(&options.leave_ranges_path);
    let policy = load_policy(&options.policy_path);
    info!(
        public_holidays = public_holidays.len(),
        leave_dates = leave_dates.len(),
        "inputs loaded"
    );

    let entitlements = compute_entitlements(&policy, current_year);
    let used_by_year = usage_by_year(&leave_dates, &public_holidays, &options.work_week);
    let annual_leave_used = used_by_year.values().sum();

    let years = options.show_years.years(current_year);
    let mut remaining_by_year = BTreeMap::new();
    for &year in &years {
        let entitlement = entitlements.by_year.get(&year).copied().unwrap_or(0);
        let used = used_by_year.get(&year).copied().unwrap_or(0);
        remaining_by_year.insert(year, entitlement.saturating_sub(used));
    }

    // Burn is assessed only after current-year usage is netted out.
    let used_current = used_by_year.get(&current_year).copied().unwrap_or(0);
    let burned = entitlements.burned.saturating_sub(used_current);

    let summary = PlanSummary {
        annual_leave_used,
        remaining_by_year,
        burned,
    };

    let html = render_document(
        &years,
        &public_holidays,
        &leave_dates,
        &options.work_week,
        &options.title,
        summary.annual_leave_used,
        &summary.remaining_by_year,
        summary.burned,
    );

    Plan { html, summary }
}
