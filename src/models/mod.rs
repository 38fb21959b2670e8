//! Core data models for the leave planner.
//!
//! This module contains the types shared by the loaders, calculators,
//! and renderer.

mod policy;
mod work_week;

pub use policy::EntitlementPolicy;
pub use work_week::WorkWeekPattern;

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// A set of calendar dates, the universal key across the planner.
///
/// Both the public-holiday set and the planned-leave set use this type;
/// set semantics make loading idempotent and collapse overlapping ranges.
pub type DateSet = BTreeSet<NaiveDate>;
