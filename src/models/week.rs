//! Week-record data model: the persisted unit of work.
//!
//! A [`WeekRecord`] is uniquely keyed by `(year, iso_week)`. Exactly one
//! record exists per key; re-initializing an existing key loads, never
//! overwrites. The serialized shape (camelCase keys) is the on-disk JSON
//! format of the store as well as the IPC payload sent to the frontend.

use serde::{Deserialize, Serialize};

use crate::models::DayEntry;
use crate::timesheet::calendar::{self, WeekAnchor};

/// The shift model a week is organized around.
///
/// The model determines the day ordering of the record: Monday-first for
/// `Day`/`Late`/`Continuous`, Sunday-first for `Night` (so the overnight
/// Sunday→Monday shift appears as day 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftModel {
    #[default]
    Day,
    Late,
    Night,
    Continuous,
}

impl ShiftModel {
    /// The day-enumeration anchor for this model.
    pub fn anchor(self) -> WeekAnchor {
        match self {
            ShiftModel::Night => WeekAnchor::Sunday,
            _ => WeekAnchor::Monday,
        }
    }

    /// Display icon shown in shift pickers and the week header.
    pub fn icon(self) -> &'static str {
        match self {
            ShiftModel::Day => "☀️",
            ShiftModel::Late => "🌆",
            ShiftModel::Night => "🌙",
            ShiftModel::Continuous => "🔄",
        }
    }
}

/// Week total as both `HH:MM` and two-decimal hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalHours {
    pub hours: String,
    pub decimal: String,
}

/// Derive the lock state from signature presence.
///
/// The lock is a consequence of both signatures being present, never an
/// independently settable flag. Every signature mutation goes through this
/// single function.
pub fn derive_locked(has_employee_signature: bool, has_supervisor_signature: bool) -> bool {
    has_employee_signature && has_supervisor_signature
}

/// The persisted timesheet unit for one `(year, iso_week)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    pub employee_name: String,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub year: i32,
    pub iso_week: u32,
    /// ISO date of the Monday beginning this ISO week.
    pub week_start_date: String,
    /// Exactly 7 entries, ordered by the shift model's anchor.
    pub days: Vec<DayEntry>,
    #[serde(default)]
    pub shift_model: ShiftModel,
    /// Opaque signature image payload (base64 PNG data URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_name: Option<String>,
    /// Derived: true iff both signatures are present. See [`derive_locked`].
    #[serde(default)]
    pub locked: bool,
}

impl WeekRecord {
    /// A fresh, unsigned record for `(year, week)` with an empty Monday-first
    /// day skeleton and the given employee name.
    pub fn create(year: i32, week: u32, employee_name: String) -> Self {
        let monday = calendar::monday_of(year, week);
        Self {
            employee_name,
            customer_name: String::new(),
            customer_email: None,
            year,
            iso_week: week,
            week_start_date: calendar::to_iso_date(monday),
            days: calendar::initialize_week_days(year, week, WeekAnchor::Monday),
            shift_model: ShiftModel::Day,
            employee_signature: None,
            supervisor_signature: None,
            supervisor_name: None,
            locked: false,
        }
    }

    /// Re-derive the lock flag from the current signature fields.
    pub fn refresh_lock(&mut self) {
        self.locked = derive_locked(
            self.employee_signature.is_some(),
            self.supervisor_signature.is_some(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_produces_seven_monday_first_days() {
        let record = WeekRecord::create(2025, 3, "Anna Muster".to_string());
        assert_eq!(record.days.len(), 7);
        assert_eq!(record.week_start_date, "2025-01-13");
        assert_eq!(record.days[0].date, "2025-01-13");
        assert_eq!(record.days[6].date, "2025-01-19");
        assert_eq!(record.shift_model, ShiftModel::Day);
        assert!(!record.locked);
    }

    #[test]
    fn derive_locked_requires_both_signatures() {
        assert!(!derive_locked(false, false));
        assert!(!derive_locked(true, false));
        assert!(!derive_locked(false, true));
        assert!(derive_locked(true, true));
    }

    #[test]
    fn refresh_lock_follows_signature_fields() {
        let mut record = WeekRecord::create(2025, 3, String::new());
        record.employee_signature = Some("data:image/png;base64,AAAA".to_string());
        record.refresh_lock();
        assert!(!record.locked);

        record.supervisor_signature = Some("data:image/png;base64,BBBB".to_string());
        record.refresh_lock();
        assert!(record.locked);

        record.employee_signature = None;
        record.refresh_lock();
        assert!(!record.locked);
    }

    #[test]
    fn shift_model_anchor_is_sunday_only_for_night() {
        assert_eq!(ShiftModel::Day.anchor(), WeekAnchor::Monday);
        assert_eq!(ShiftModel::Late.anchor(), WeekAnchor::Monday);
        assert_eq!(ShiftModel::Continuous.anchor(), WeekAnchor::Monday);
        assert_eq!(ShiftModel::Night.anchor(), WeekAnchor::Sunday);
    }

    #[test]
    fn shift_model_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ShiftModel::Night).expect("serialize"),
            serde_json::json!("night")
        );
        let model: ShiftModel = serde_json::from_str("\"continuous\"").expect("deserialize");
        assert_eq!(model, ShiftModel::Continuous);
    }

    #[test]
    fn serde_round_trip_preserves_record() {
        let mut record = WeekRecord::create(2025, 3, "Anna Muster".to_string());
        record.customer_name = "Baustelle Nord".to_string();
        record.customer_email = Some("dispo@example.com".to_string());
        record.employee_signature = Some("data:image/png;base64,AAAA".to_string());
        record.days[0].start = "08:00".to_string();
        record.days[0].end = "17:00".to_string();
        record.days[0].recompute_hours();

        let json = serde_json::to_string(&record).expect("serialize");
        let recovered: WeekRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, recovered);
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let record = WeekRecord::create(2025, 3, "Anna".to_string());
        let value = serde_json::to_value(&record).expect("serialize");
        assert!(value.get("employeeName").is_some());
        assert!(value.get("isoWeek").is_some());
        assert!(value.get("weekStartDate").is_some());
        assert!(value.get("shiftModel").is_some());
        assert!(value.get("employee_name").is_none());
    }

    #[test]
    fn optional_fields_absent_when_none() {
        let record = WeekRecord::create(2025, 3, "Anna".to_string());
        let value = serde_json::to_value(&record).expect("serialize");
        assert!(value.get("customerEmail").is_none());
        assert!(value.get("employeeSignature").is_none());
        assert!(value.get("supervisorName").is_none());
    }

    #[test]
    fn deserializes_record_without_optional_fields() {
        // Records written before the shift model existed must still load.
        let json = r#"{
            "employeeName": "Anna",
            "customerName": "",
            "year": 2024,
            "isoWeek": 50,
            "weekStartDate": "2024-12-09",
            "days": []
        }"#;
        let record: WeekRecord = serde_json::from_str(json).expect("deserialize legacy record");
        assert_eq!(record.shift_model, ShiftModel::Day);
        assert!(!record.locked);
        assert!(record.employee_signature.is_none());
    }
}
