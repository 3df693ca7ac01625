//! Store key namespace.
//!
//! Every key the application writes carries the `wpdl_` prefix so that
//! backup export/import and bulk deletion can address the app's data
//! without touching anything else living in the same directory.

/// Common prefix of all application keys.
pub const PREFIX: &str = "wpdl_";

/// UI language code (`"de"` or `"en"`).
pub const LANGUAGE: &str = "wpdl_language";
/// The employee's display name, entered once during onboarding.
pub const EMPLOYEE_NAME: &str = "wpdl_employee_name";
/// Privacy-consent flag, `"true"` once given.
pub const CONSENT: &str = "wpdl_consent";
/// RFC 3339 timestamp of the last successful backup export.
pub const LAST_BACKUP_DATE: &str = "wpdl_last_backup_date";
/// RFC 3339 timestamp of the first application start, written once.
pub const FIRST_USE_DATE: &str = "wpdl_first_use_date";

/// Prefix shared by all week-record keys.
pub const WEEK_PREFIX: &str = "wpdl_week_";

/// The key a week record is stored under. The week number is unpadded
/// (`wpdl_week_2025_3`) to match records written by earlier versions.
pub fn week(year: i32, week: u32) -> String {
    format!("{WEEK_PREFIX}{year}_{week}")
}
