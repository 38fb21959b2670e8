//! Leave-range parser.
//!
//! Parses the user's declared leave as a comma/newline-delimited list of
//! `YYYYMMDD` single dates or `YYYYMMDD-YYYYMMDD` inclusive ranges and
//! expands it into a [`DateSet`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::models::DateSet;

use super::parse_yyyymmdd;

/// Loads and expands the leave-range file at `path`.
///
/// A missing or unreadable file yields an empty set.
pub fn load_leave_ranges(path: &Path) -> DateSet {
    match fs::read_to_string(path) {
        Ok(text) => parse_leave_ranges(&text),
        Err(_) => {
            debug!(file = %path.display(), "leave-range file missing, no leave dates loaded");
            DateSet::new()
        }
    }
}

/// Expands a leave-range blob into the set of declared leave dates.
///
/// Newlines are treated as commas; tokens are trimmed and empty tokens
/// dropped. A token without a hyphen is a single date; a token with a
/// hyphen is split on the first hyphen into an inclusive range, with a
/// reversed range (end before start) swapped before expansion. Any token
/// that fails to parse is skipped as a whole.
///
/// # Example
///
/// ```
/// use leave_planner::input::parse_leave_ranges;
///
/// let dates = parse_leave_ranges("20250102-20250103,20250106\n20250106");
/// assert_eq!(dates.len(), 3);
/// ```
pub fn parse_leave_ranges(text: &str) -> DateSet {
    let mut dates = DateSet::new();

    for token in text.replace('\n', ",").split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.split_once('-') {
            None => {
                if let Some(date) = parse_yyyymmdd(token) {
                    dates.insert(date);
                }
            }
            Some((start, end)) => {
                let (Some(start), Some(end)) = (parse_yyyymmdd(start), parse_yyyymmdd(end)) else {
                    continue;
                };
                let (start, end) = if end < start { (end, start) } else { (start, end) };
                let mut current = start;
                while current <= end {
                    dates.insert(current);
                    let Some(next) = current.succ_opt() else {
                        break;
                    };
                    current = next;
                }
            }
        }
    }

    dates
}
