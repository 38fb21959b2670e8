//! Entitlement and carry-over arithmetic.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::EntitlementPolicy;

/// Per-year leave entitlements derived from a policy record.
///
/// Contains exactly two entries: the current year (the uncapped carry-over)
/// and the next year (package plus capped carry-over plus misc days). The
/// `burned` amount is the carry-over that exceeds the cap, before any
/// netting against current-year usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entitlements {
    /// Entitlement day-count per year.
    pub by_year: BTreeMap<i32, u32>,
    /// Carry-over forfeited to the cap, before usage netting.
    pub burned: u32,
}

/// Computes entitlements for the current and next year.
///
/// Pure arithmetic with no I/O:
/// - current year: the carry-over amount, uncapped;
/// - next year: `package + min(carry_over, cap) + misc`;
/// - burned: `max(carry_over - cap, 0)`.
///
/// The next-year total saturates at `u32::MAX` rather than overflowing,
/// so even an absurdly large policy record cannot abort the run.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::compute_entitlements;
/// use leave_planner::models::EntitlementPolicy;
///
/// let policy = EntitlementPolicy { package: 14, carry_over: 5, misc: 2, cap: 3 };
/// let entitlements = compute_entitlements(&policy, 2024);
/// assert_eq!(entitlements.by_year[&2024], 5);
/// assert_eq!(entitlements.by_year[&2025], 19);
/// assert_eq!(entitlements.burned, 2);
/// ```
pub fn compute_entitlements(policy: &EntitlementPolicy, current_year: i32) -> Entitlements {
    let carry_allowed = policy.carry_over.min(policy.cap);
    let burned = policy.carry_over.saturating_sub(policy.cap);

    let next_year_total = policy
        .package
        .saturating_add(carry_allowed)
        .saturating_add(policy.misc);

    let mut by_year = BTreeMap::new();
    by_year.insert(current_year, policy.carry_over);
    by_year.insert(current_year + 1, next_year_total);

    Entitlements { by_year, burned }
}
