//! Verification payload and export filename.
//!
//! The payload is the machine-readable summary embedded as a QR code on the
//! exported PDF, letting a back office verify a printed sheet against the
//! claimed hours without scanning the whole table.

use serde::{Deserialize, Serialize};

use crate::models::WeekRecord;
use crate::timesheet::time;

/// Discriminator so a scanner can reject QR codes from other apps.
pub const PAYLOAD_TYPE: &str = "WPDL_TIMESHEET";

/// The JSON structure encoded into the verification QR code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPayload {
    #[serde(rename = "type")]
    pub payload_type: String,
    pub version: String,
    pub employee: PartyRef,
    pub supervisor: SupervisorRef,
    pub period: Period,
    pub customer: String,
    pub days: Vec<PayloadDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupervisorRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub week: u32,
    pub year: i32,
    pub start_date: String,
    pub end_date: String,
}

/// One worked day in the payload. Days without any worked time are omitted
/// from the payload entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadDay {
    pub date: String,
    pub hours: String,
    pub decimal: String,
}

/// Build the verification payload for `record`.
///
/// The day list is first normalized to exactly 7 entries (extra entries
/// dropped, missing ones treated as empty), then filtered down to days
/// that carry a date and a non-zero worked time.
pub fn build_payload(record: &WeekRecord) -> ExportPayload {
    let mut normalized: Vec<PayloadDay> = record
        .days
        .iter()
        .take(7)
        .map(|d| PayloadDay {
            date: d.date.clone(),
            hours: d.worked_hours(),
            decimal: d.worked_decimal_hours.clone(),
        })
        .collect();
    while normalized.len() < 7 {
        normalized.push(PayloadDay {
            date: String::new(),
            hours: time::to_time_string(0),
            decimal: time::decimal_hours(0),
        });
    }

    let end_date = match normalized[6].date.as_str() {
        "" => record.week_start_date.clone(),
        date => date.to_string(),
    };

    let days = normalized
        .into_iter()
        .filter(|d| !d.date.is_empty() && (d.hours != "00:00" || d.decimal != "0.00"))
        .collect();

    ExportPayload {
        payload_type: PAYLOAD_TYPE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        employee: PartyRef {
            name: record.employee_name.clone(),
        },
        supervisor: SupervisorRef {
            name: record.supervisor_name.clone(),
        },
        period: Period {
            week: record.iso_week,
            year: record.year,
            start_date: record.week_start_date.clone(),
            end_date,
        },
        customer: record.customer_name.clone(),
        days,
    }
}

/// Filename of the exported PDF: `<prefix>_<employee>_<year>_<week:02>.pdf`
/// with every non-ASCII-alphanumeric character of the name replaced by `_`.
pub fn export_filename(prefix: &str, employee_name: &str, year: i32, week: u32) -> String {
    let sanitized: String = employee_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{prefix}_{sanitized}_{year}_{week:02}.pdf")
}
