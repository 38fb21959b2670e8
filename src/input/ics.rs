//! Calendar-source loader for public-holiday `.ics` files.
//!
//! Reads a directory of per-year iCalendar files, extracts the `DTSTART`
//! dates of all events, and unions them into a single [`DateSet`]. Parsing
//! follows RFC 5545 line folding (continuation lines begin with a single
//! space) but is deliberately shallow otherwise: only `BEGIN:VEVENT` /
//! `END:VEVENT` delimiters and the first 8 characters of each `DTSTART`
//! value matter. Malformed fields are skipped.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use encoding_rs::mem::decode_latin1;
use tracing::debug;

use crate::models::DateSet;

use super::parse_yyyymmdd;

/// Filename prefix of per-year public-holiday calendars.
const CALENDAR_PREFIX: &str = "public-holidays-sg-";
/// Filename suffix of per-year public-holiday calendars.
const CALENDAR_SUFFIX: &str = ".ics";

/// Loads public holidays from every matching calendar file in a directory.
///
/// Files are matched by the fixed `public-holidays-sg-<year>.ics` naming
/// convention. A missing directory or zero matching files yields an empty
/// set. Each file is decoded as UTF-8, falling back to Latin-1 when the
/// bytes are not valid UTF-8; decoding is never fatal.
pub fn load_public_holidays(dir: &Path) -> DateSet {
    let mut dates = DateSet::new();
    let Ok(entries) = fs::read_dir(dir) else {
        debug!(dir = %dir.display(), "calendar directory missing, no public holidays loaded");
        return dates;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with(CALENDAR_PREFIX) || !name.ends_with(CALENDAR_SUFFIX) {
            continue;
        }
        let Ok(bytes) = fs::read(&path) else {
            continue;
        };
        let text = match std::str::from_utf8(&bytes) {
            Ok(text) => text.to_string(),
            Err(_) => decode_latin1(&bytes).into_owned(),
        };
        let file_dates = parse_calendar_dates(&text);
        debug!(file = %path.display(), count = file_dates.len(), "loaded calendar file");
        dates.extend(file_dates);
    }

    dates
}

/// Extracts event start dates from iCalendar text.
///
/// Lines are unfolded first, then `DTSTART` fields inside `VEVENT` blocks
/// are parsed as `YYYYMMDD`, ignoring any time-of-day suffix. Unparsable
/// fields are silently skipped.
pub fn parse_calendar_dates(text: &str) -> DateSet {
    let mut dates = DateSet::new();
    let mut in_event = false;

    for line in unfold_lines(text) {
        if line.starts_with("BEGIN:VEVENT") {
            in_event = true;
        } else if line.starts_with("END:VEVENT") {
            in_event = false;
        } else if in_event && line.starts_with("DTSTART") {
            if let Some(date) = parse_dtstart(&line) {
                dates.insert(date);
            }
        }
    }

    dates
}

/// Parses one unfolded `DTSTART` line, e.g. `DTSTART;VALUE=DATE:20250101`
/// or `DTSTART:20250101T080000`. Only the first 8 characters of the value
/// are considered.
fn parse_dtstart(line: &str) -> Option<NaiveDate> {
    let (_, value) = line.split_once(':')?;
    parse_yyyymmdd(value.trim().get(..8)?)
}

/// Unfolds RFC 5545 folded lines: a line beginning with a single space is
/// a continuation of the previous logical line, with the space stripped.
fn unfold_lines(text: &str) -> Vec<String> {
    let mut unfolded: Vec<String> = Vec::new();
    for line in text.lines() {
        match (line.strip_prefix(' '), unfolded.last_mut()) {
            (Some(rest), Some(previous)) => previous.push_str(rest),
            _ => unfolded.push(line.to_string()),
        }
    }
    unfolded
}
