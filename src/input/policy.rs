//! Entitlement-policy parser.
//!
//! Parses the one-line policy record `package,carry-over,misc,cap`. The
//! first non-empty line decides the outcome: anything other than exactly
//! four non-negative integers yields the all-zero default, with no partial
//! recovery and no further lines considered.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::models::EntitlementPolicy;

/// Loads the entitlement-policy file at `path`.
///
/// A missing or unreadable file yields the all-zero default.
pub fn load_policy(path: &Path) -> EntitlementPolicy {
    match fs::read_to_string(path) {
        Ok(text) => parse_policy(&text),
        Err(_) => {
            debug!(file = %path.display(), "policy file missing, using zero entitlements");
            EntitlementPolicy::default()
        }
    }
}

/// Parses a policy record from text.
///
/// # Example
///
/// ```
/// use leave_planner::input::parse_policy;
///
/// let policy = parse_policy("14,5,2,3");
/// assert_eq!(policy.package, 14);
/// assert_eq!(policy.cap, 3);
/// ```
pub fn parse_policy(text: &str) -> EntitlementPolicy {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [package, carry_over, misc, cap] = fields.as_slice() else {
            return EntitlementPolicy::default();
        };
        return match (package.parse(), carry_over.parse(), misc.parse(), cap.parse()) {
            (Ok(package), Ok(carry_over), Ok(misc), Ok(cap)) => EntitlementPolicy {
                package,
                carry_over,
                misc,
                cap,
            },
            _ => EntitlementPolicy::default(),
        };
    }
    EntitlementPolicy::default()
}
