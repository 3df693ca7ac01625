//! ISO-8601 week calendar.
//!
//! Weeks are identified by `(iso_year, iso_week)`; the ISO year can differ
//! from the calendar year near the new year boundary. Day sequences come in
//! two orderings: Monday-first (the default) and Sunday-first, used by
//! night-shift weeks so the overnight Sunday→Monday shift leads the week.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::DayEntry;

/// The day a week's 7-entry sequence starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekAnchor {
    Monday,
    Sunday,
}

/// Navigation direction for week switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDirection {
    Prev,
    Next,
    Current,
}

/// Monday-first German weekday names.
const DAY_NAMES: [&str; 7] = [
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
    "Sonntag",
];

/// The `(iso_year, iso_week)` pair a date falls in.
pub fn iso_week_of(date: NaiveDate) -> (i32, u32) {
    let iso = date.iso_week();
    (iso.year(), iso.week())
}

/// Today's `(iso_year, iso_week)` in local time.
pub fn current_week() -> (i32, u32) {
    iso_week_of(Local::now().date_naive())
}

/// Number of ISO weeks in `year` (52 or 53).
fn last_iso_week(year: i32) -> u32 {
    // Dec 28 always falls in the last ISO week of its year.
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|d| d.iso_week().week())
        .unwrap_or(52)
}

/// The Monday beginning ISO week `week` of `year`.
///
/// Out-of-range week numbers are clamped into `1..=last_iso_week(year)`, so
/// the function is total for any plausible year.
pub fn monday_of(year: i32, week: u32) -> NaiveDate {
    let week = week.clamp(1, last_iso_week(year));
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).unwrap_or_default()
}

/// The 7 dates of a week in anchor order.
///
/// Sunday-anchored weeks start one day before the ISO Monday, so the last
/// entry is the ISO Saturday.
pub fn days_of(year: i32, week: u32, anchor: WeekAnchor) -> [NaiveDate; 7] {
    let monday = monday_of(year, week);
    let first = match anchor {
        WeekAnchor::Monday => monday,
        WeekAnchor::Sunday => monday.pred_opt().unwrap_or(monday),
    };
    std::array::from_fn(|i| {
        first
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(first)
    })
}

/// The week reached by navigating from `(year, week)` in `direction`.
pub fn navigate(year: i32, week: u32, direction: WeekDirection) -> (i32, u32) {
    let monday = monday_of(year, week);
    let target = match direction {
        WeekDirection::Next => monday.checked_add_days(Days::new(7)),
        WeekDirection::Prev => monday.checked_sub_days(Days::new(7)),
        WeekDirection::Current => return current_week(),
    };
    iso_week_of(target.unwrap_or(monday))
}

/// ISO date string `YYYY-MM-DD`.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Canonical list/sort key for a week: `"<year>_<week:02>"`.
pub fn week_key(year: i32, week: u32) -> String {
    format!("{year}_{week:02}")
}

/// Parse a `"<year>_<week>"` key back into `(year, week)`.
///
/// Accepts both padded and unpadded week numbers.
pub fn parse_week_key(key: &str) -> Option<(i32, u32)> {
    let (year, week) = key.rsplit_once('_')?;
    if year.len() != 4 || week.is_empty() || week.len() > 2 {
        return None;
    }
    Some((year.parse().ok()?, week.parse().ok()?))
}

/// German weekday name at position `index` of an anchor-ordered week.
pub fn day_name(index: usize, anchor: WeekAnchor) -> &'static str {
    let index = index % 7;
    match anchor {
        WeekAnchor::Monday => DAY_NAMES[index],
        // Sunday-first: Sonntag, Montag, ..., Samstag.
        WeekAnchor::Sunday => DAY_NAMES[(index + 6) % 7],
    }
}

/// Row label for a day in the week table, e.g. `"Montag, 13.01"`.
pub fn day_label(index: usize, anchor: WeekAnchor, date: NaiveDate) -> String {
    format!("{}, {}", day_name(index, anchor), date.format("%d.%m"))
}

/// Human-readable date range of a week, e.g. `"13.01. - 19.01."`.
pub fn date_range_label(year: i32, week: u32, anchor: WeekAnchor) -> String {
    let days = days_of(year, week, anchor);
    format!(
        "{} - {}",
        days[0].format("%d.%m."),
        days[6].format("%d.%m.")
    )
}

/// Fresh empty [`DayEntry`] values for every date of the week.
pub fn initialize_week_days(year: i32, week: u32, anchor: WeekAnchor) -> Vec<DayEntry> {
    days_of(year, week, anchor)
        .into_iter()
        .map(|d| DayEntry::empty(to_iso_date(d)))
        .collect()
}

/// True when `(year, week)` is the local current ISO week.
pub fn is_current_week(year: i32, week: u32) -> bool {
    (year, week) == current_week()
}

/// True when the week lies strictly before the current one.
pub fn is_week_in_past(year: i32, week: u32) -> bool {
    let (cur_year, cur_week) = current_week();
    (year, week) < (cur_year, cur_week)
}
