//! Time-of-day arithmetic.
//!
//! All functions operate on `HH:MM` strings and minute counts. Malformed
//! input is recovered locally: parsing never fails, it yields `0` (or the
//! input unchanged for the auto-formatter). Callers that need to tell
//! "unset" from "midnight" must check for the empty string first, because
//! both map to `0` minutes.

use chrono::{Days, NaiveDate};

use crate::models::DayEntry;

/// A shift starting at or after this hour is classified as a night shift.
pub const NIGHT_SHIFT_START_HOUR: u32 = 22;
/// A shift ending at or before this hour is classified as a night shift.
pub const NIGHT_SHIFT_END_HOUR: u32 = 8;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse an `HH:MM` string into minutes since midnight.
///
/// Empty or malformed input yields `0`; callers must treat `0` and "unset"
/// as ambiguous and check for the empty string first.
pub fn to_minutes(time: &str) -> u32 {
    let Some((hours, minutes)) = time.split_once(':') else {
        return 0;
    };
    let hours: u32 = hours.trim().parse().unwrap_or(0);
    let minutes: u32 = minutes.trim().parse().unwrap_or(0);
    hours * 60 + minutes
}

/// Format a minute count as a zero-padded `HH:MM` string.
///
/// No modulo is applied: `1500` formats as `"25:00"`. Callers that want a
/// time of day must reduce the value themselves.
pub fn to_time_string(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Format a minute count as two-decimal fractional hours (e.g. `"8.25"`).
pub fn decimal_hours(minutes: u32) -> String {
    format!("{:.2}", minutes as f64 / 60.0)
}

/// Duration of one break in minutes; zero-length or malformed breaks
/// (end ≤ start, or either side empty) contribute nothing.
fn break_minutes(from: &str, to: &str) -> i64 {
    if from.is_empty() || to.is_empty() {
        return 0;
    }
    let start = to_minutes(from) as i64;
    let end = to_minutes(to) as i64;
    if end > start {
        end - start
    } else {
        0
    }
}

/// Total worked minutes for one day.
///
/// - Empty start or end → 0.
/// - The end is pushed to the next day (+24 h) when the entry is flagged as
///   a night shift or when `end <= start` numerically.
/// - Each well-formed break is subtracted; malformed breaks are ignored.
/// - The result is clamped to ≥ 0.
pub fn compute_worked_minutes(day: &DayEntry) -> u32 {
    if day.start.is_empty() || day.end.is_empty() {
        return 0;
    }

    let start = to_minutes(&day.start) as i64;
    let mut end = to_minutes(&day.end) as i64;
    if day.is_night_shift || end <= start {
        end += MINUTES_PER_DAY;
    }

    let mut total = end - start;
    total -= break_minutes(&day.break1_start, &day.break1_end);
    total -= break_minutes(&day.break2_start, &day.break2_end);

    total.max(0) as u32
}

/// Night-shift heuristic: start hour ≥ 22, end hour ≤ 8, or end ≤ start.
///
/// Known over-trigger: an ordinary early shift ending at 08:00 or a late
/// shift starting at 22:30 is also classified as a night shift even though
/// it never crosses midnight. The behavior is kept exactly for
/// compatibility with existing records.
pub fn detect_night_shift(start: &str, end: &str) -> bool {
    if start.is_empty() || end.is_empty() {
        return false;
    }

    let start_minutes = to_minutes(start);
    let end_minutes = to_minutes(end);

    start_minutes / 60 >= NIGHT_SHIFT_START_HOUR
        || end_minutes / 60 <= NIGHT_SHIFT_END_HOUR
        || end_minutes <= start_minutes
}

/// The calendar date a night shift ends on: the day after `start_date`.
///
/// Returns `None` (logged) when the date cannot be parsed.
pub fn night_shift_end_date(start_date: &str) -> Option<String> {
    let date = match NaiveDate::parse_from_str(start_date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("cannot derive night-shift end date from {start_date:?}: {e}");
            return None;
        }
    };
    date.checked_add_days(Days::new(1))
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Advisory check: does the day's worked time exceed `max_hours`?
///
/// Never blocks data entry; the caller decides how to warn.
pub fn exceeds_daily_max(day: &DayEntry, max_hours: f64) -> bool {
    compute_worked_minutes(day) as f64 / 60.0 > max_hours
}

/// Validate an `HH:MM` string. The empty string counts as valid ("unset").
pub fn is_valid_time(time: &str) -> bool {
    if time.is_empty() {
        return true;
    }
    let Some((hours, minutes)) = time.split_once(':') else {
        return false;
    };
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return false;
    }
    let (Ok(h), Ok(m)) = (hours.parse::<u32>(), minutes.parse::<u32>()) else {
        return false;
    };
    h <= 23 && m <= 59
}

/// Auto-format loose time input: `"8"` → `"08:00"`, `"830"`/`"0830"` →
/// `"08:30"`, `"8:30"` → `"08:30"`.
///
/// Input that cannot be interpreted is returned unchanged so the user can
/// keep typing.
pub fn parse_time_input(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let parsed = match digits.len() {
        0 => None,
        1 | 2 => digits.parse::<u32>().ok().filter(|h| *h <= 23).map(|h| (h, 0)),
        3 => split_digits(&digits, 1),
        4 => split_digits(&digits, 2),
        _ => None,
    };

    match parsed {
        Some((h, m)) => format!("{h:02}:{m:02}"),
        None => input.to_string(),
    }
}

/// Split a digit string into (hours, minutes) at `at`, validating ranges.
fn split_digits(digits: &str, at: usize) -> Option<(u32, u32)> {
    let hours: u32 = digits[..at].parse().ok()?;
    let minutes: u32 = digits[at..].parse().ok()?;
    (hours <= 23 && minutes <= 59).then_some((hours, minutes))
}
