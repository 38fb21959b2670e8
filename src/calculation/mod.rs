//! Calculation logic for the leave planner.
//!
//! This module contains the pure functions of the planner: entitlement
//! and carry-over arithmetic, annual-leave usage counting, and per-day
//! status classification. None of them perform I/O.

mod day_status;
mod entitlement;
mod usage;

pub use day_status::{DayStatus, classify_day};
pub use entitlement::{Entitlements, compute_entitlements};
pub use usage::{annual_leave_used, usage_by_year};
