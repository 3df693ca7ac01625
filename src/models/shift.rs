//! Shift templates: named presets of default start/end/break times.
//!
//! A template is applied to a subset of week days chosen by a 7-element
//! boolean mask aligned to the record's current day ordering.

use serde::{Deserialize, Serialize};

use crate::models::ShiftModel;

/// Default start/end/break times applied by a shift preset.
///
/// All fields are `HH:MM` strings; empty means "no value". The frontend may
/// send an edited copy of a builtin template, so this is a plain data
/// carrier without invariants of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTemplate {
    pub start: String,
    pub end: String,
    pub break1_start: String,
    pub break1_end: String,
    pub break2_start: String,
    pub break2_end: String,
}

impl ShiftTemplate {
    /// The builtin default times for a shift model.
    pub fn builtin(model: ShiftModel) -> ShiftTemplate {
        let (start, end, break1_start, break1_end) = match model {
            ShiftModel::Day => ("08:00", "17:00", "12:00", "12:30"),
            ShiftModel::Late => ("14:00", "23:00", "18:00", "18:30"),
            ShiftModel::Night => ("22:00", "06:00", "02:00", "02:30"),
            ShiftModel::Continuous => ("06:00", "14:00", "09:00", "09:30"),
        };
        ShiftTemplate {
            start: start.to_string(),
            end: end.to_string(),
            break1_start: break1_start.to_string(),
            break1_end: break1_end.to_string(),
            break2_start: String::new(),
            break2_end: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_day_template_times() {
        let t = ShiftTemplate::builtin(ShiftModel::Day);
        assert_eq!(t.start, "08:00");
        assert_eq!(t.end, "17:00");
        assert_eq!(t.break1_start, "12:00");
        assert_eq!(t.break1_end, "12:30");
        assert!(t.break2_start.is_empty());
    }

    #[test]
    fn builtin_night_template_crosses_midnight() {
        let t = ShiftTemplate::builtin(ShiftModel::Night);
        assert_eq!(t.start, "22:00");
        assert_eq!(t.end, "06:00");
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let t = ShiftTemplate::builtin(ShiftModel::Late);
        let value = serde_json::to_value(&t).expect("serialize");
        assert!(value.get("break1Start").is_some());
        assert!(value.get("break1_start").is_none());
    }

    #[test]
    fn serde_round_trip() {
        let t = ShiftTemplate::builtin(ShiftModel::Continuous);
        let json = serde_json::to_string(&t).expect("serialize");
        let recovered: ShiftTemplate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(t, recovered);
    }
}
