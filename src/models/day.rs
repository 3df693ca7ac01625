//! Day-entry data model: one calendar day's time record.
//!
//! [`DayEntry`] is both the in-memory and the persisted representation
//! (it maps 1:1 to the `days` array in the stored week JSON). Fields are
//! serialized with camelCase keys so the TypeScript frontend receives a
//! consistent naming convention.

use serde::{Deserialize, Serialize};

use crate::timesheet::time;

/// One calendar day inside a [`crate::models::WeekRecord`].
///
/// All time-of-day fields hold `HH:MM` strings; an empty string means
/// "unset". `worked_minutes` and `worked_decimal_hours` are derived:
/// always recomputed from the time fields, never mutated independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    /// Calendar date, ISO form `YYYY-MM-DD`.
    pub date: String,
    /// Shift start time, `HH:MM` or empty.
    pub start: String,
    /// Shift end time, `HH:MM` or empty.
    pub end: String,
    pub break1_start: String,
    pub break1_end: String,
    pub break2_start: String,
    pub break2_end: String,
    /// Derived: total worked minutes for this day, always ≥ 0.
    pub worked_minutes: u32,
    /// Derived: `worked_minutes / 60` as a two-decimal string (e.g. `"8.25"`).
    pub worked_decimal_hours: String,
    /// Derived: set when the start/end pair matches the night-shift heuristic.
    #[serde(default)]
    pub is_night_shift: bool,
    /// Derived: the calendar date the shift ends on, set only for night shifts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub night_shift_end_date: Option<String>,
}

impl DayEntry {
    /// A fresh entry for `date` with no times and zero worked hours.
    pub fn empty(date: String) -> Self {
        Self {
            date,
            start: String::new(),
            end: String::new(),
            break1_start: String::new(),
            break1_end: String::new(),
            break2_start: String::new(),
            break2_end: String::new(),
            worked_minutes: 0,
            worked_decimal_hours: "0.00".to_string(),
            is_night_shift: false,
            night_shift_end_date: None,
        }
    }

    /// Reset all time fields and derived values, keeping the date.
    pub fn clear_times(&mut self) {
        let date = std::mem::take(&mut self.date);
        *self = DayEntry::empty(date);
    }

    /// Recompute the derived night-shift flag and end date from the current
    /// start/end pair. Called whenever start or end changes.
    pub fn recompute_night_shift(&mut self) {
        self.is_night_shift = time::detect_night_shift(&self.start, &self.end);
        self.night_shift_end_date = if self.is_night_shift {
            time::night_shift_end_date(&self.date)
        } else {
            None
        };
    }

    /// Recompute the derived worked minutes and decimal hours from the time
    /// fields. Called after every edit of this entry.
    pub fn recompute_hours(&mut self) {
        self.worked_minutes = time::compute_worked_minutes(self);
        self.worked_decimal_hours = time::decimal_hours(self.worked_minutes);
    }

    /// The derived worked time as a zero-padded `HH:MM` string.
    pub fn worked_hours(&self) -> String {
        time::to_time_string(self.worked_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_day_has_zero_derived_values() {
        let day = DayEntry::empty("2025-01-13".to_string());
        assert_eq!(day.worked_minutes, 0);
        assert_eq!(day.worked_decimal_hours, "0.00");
        assert_eq!(day.worked_hours(), "00:00");
        assert!(!day.is_night_shift);
        assert!(day.night_shift_end_date.is_none());
    }

    #[test]
    fn clear_times_keeps_date() {
        let mut day = DayEntry::empty("2025-01-13".to_string());
        day.start = "08:00".to_string();
        day.end = "17:00".to_string();
        day.recompute_hours();
        assert!(day.worked_minutes > 0);

        day.clear_times();
        assert_eq!(day.date, "2025-01-13");
        assert!(day.start.is_empty());
        assert_eq!(day.worked_minutes, 0);
    }

    #[test]
    fn recompute_night_shift_sets_flag_and_end_date() {
        let mut day = DayEntry::empty("2025-01-13".to_string());
        day.start = "22:00".to_string();
        day.end = "06:00".to_string();
        day.recompute_night_shift();
        assert!(day.is_night_shift);
        assert_eq!(day.night_shift_end_date.as_deref(), Some("2025-01-14"));
    }

    #[test]
    fn recompute_night_shift_clears_stale_end_date() {
        let mut day = DayEntry::empty("2025-01-13".to_string());
        day.start = "22:00".to_string();
        day.end = "06:00".to_string();
        day.recompute_night_shift();
        assert!(day.night_shift_end_date.is_some());

        day.start = "09:00".to_string();
        day.end = "17:00".to_string();
        day.recompute_night_shift();
        assert!(!day.is_night_shift);
        assert!(day.night_shift_end_date.is_none());
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let mut day = DayEntry::empty("2025-01-13".to_string());
        day.break1_start = "12:00".to_string();
        let value = serde_json::to_value(&day).expect("serialize DayEntry");
        assert!(value.get("break1Start").is_some());
        assert!(value.get("break1_start").is_none());
        assert!(value.get("workedMinutes").is_some());
        assert!(value.get("workedDecimalHours").is_some());
        assert!(value.get("isNightShift").is_some());
    }

    #[test]
    fn night_shift_end_date_absent_when_none() {
        let day = DayEntry::empty("2025-01-13".to_string());
        let value = serde_json::to_value(&day).expect("serialize DayEntry");
        assert!(value.get("nightShiftEndDate").is_none());
    }

    #[test]
    fn serde_round_trip() {
        let mut day = DayEntry::empty("2025-01-13".to_string());
        day.start = "22:00".to_string();
        day.end = "06:00".to_string();
        day.recompute_night_shift();
        day.recompute_hours();

        let json = serde_json::to_string(&day).expect("serialize");
        let recovered: DayEntry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(day, recovered);
    }
}
