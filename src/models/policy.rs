//! Leave-entitlement policy model.

use serde::{Deserialize, Serialize};

/// The leave-entitlement policy record for a single run.
///
/// All four amounts are non-negative day counts. The record is parsed once
/// per run from a one-line CSV file; when the file is missing, unreadable,
/// or structurally invalid, the all-zero [`Default`] is used instead.
///
/// # Example
///
/// ```
/// use leave_planner::models::EntitlementPolicy;
///
/// let policy = EntitlementPolicy {
///     package: 14,
///     carry_over: 5,
///     misc: 2,
///     cap: 3,
/// };
/// assert_eq!(policy.carry_over.min(policy.cap), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntitlementPolicy {
    /// Annual leave package granted for the next year.
    pub package: u32,
    /// Unused leave carried over from the prior year.
    pub carry_over: u32,
    /// Miscellaneous bonus days added to next year's entitlement.
    pub misc: u32,
    /// Maximum carry-over that may roll into next year; the excess is burned.
    pub cap: u32,
}
